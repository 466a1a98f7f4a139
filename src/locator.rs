//! Search-root resolution, image discovery, and the image-to-label path
//! heuristic.
//!
//! Label paths are derived from image paths by one of two conventions:
//! substituting `labels` for `images` when the image path contains that
//! substring, or assuming a `labels/` directory that is a sibling of the
//! image's parent directory. Any other layout yields a label path that does
//! not exist, which the orchestrator then treats per its skip policy.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::descriptor::{Descriptor, SPLIT_KEYS};
use crate::error::Yolo2LabelmeError;

/// Image extensions recognized during discovery.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "tiff", "bmp", "gif"];

/// Whether a path names a recognized image file, by extension.
pub fn is_image_file(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
        return false;
    };

    IMAGE_EXTENSIONS
        .iter()
        .any(|allowed| ext.eq_ignore_ascii_case(allowed))
}

/// Resolve the directories to scan for images.
///
/// An explicit dataset directory overrides the descriptor's splits entirely.
/// Otherwise each split directory defined in the descriptor is resolved
/// against the descriptor file's own directory to an absolute path; absent
/// splits are reported and skipped. A descriptor defining no splits at all
/// is a configuration error.
///
/// Absolutization is lexical (no symlink resolution), so the label-path
/// heuristic sees the same string whether the descriptor was given as a
/// relative or an absolute path.
pub fn resolve_search_dirs(
    descriptor_path: &Path,
    descriptor: &Descriptor,
    dataset_dir: Option<&Path>,
) -> Result<Vec<PathBuf>, Yolo2LabelmeError> {
    if let Some(dir) = dataset_dir {
        return Ok(vec![dir.to_path_buf()]);
    }

    let abs_descriptor = std::path::absolute(descriptor_path).map_err(Yolo2LabelmeError::Io)?;
    let descriptor_dir = abs_descriptor.parent().unwrap_or_else(|| Path::new(""));

    let mut search_dirs = Vec::new();
    for key in SPLIT_KEYS {
        match descriptor.split_dir(key) {
            Some(rel) => search_dirs.push(descriptor_dir.join(rel)),
            None => println!(
                "No {} directory defined in {}.",
                key,
                descriptor_path.display()
            ),
        }
    }

    if search_dirs.is_empty() {
        return Err(Yolo2LabelmeError::NoSearchDirs {
            descriptor: descriptor_path.to_path_buf(),
        });
    }

    Ok(search_dirs)
}

/// List the image files directly inside `dir`, sorted by file name.
///
/// Discovery is deliberately non-recursive: subdirectories are not entered.
pub fn discover_images(dir: &Path) -> Result<Vec<PathBuf>, Yolo2LabelmeError> {
    let mut images = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && is_image_file(entry.path()) {
            images.push(entry.path().to_path_buf());
        }
    }

    Ok(images)
}

/// Derive the expected label path for a discovered image.
///
/// When the image path contains the substring `images`, every occurrence is
/// substituted with `labels` and the extension swapped for `.txt`. Otherwise
/// the label is assumed to live in a `labels/` directory one level above the
/// image's own directory. The substring check is textual: a dataset whose
/// absolute path incidentally contains `images` takes the first branch.
pub fn label_path_for(image_path: &Path) -> PathBuf {
    let path_str = image_path.to_string_lossy();

    if path_str.contains("images") {
        let substituted = path_str.replace("images", "labels");
        PathBuf::from(replace_image_extension(&substituted, "txt"))
    } else {
        let file_name = image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let grandparent = image_path
            .parent()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new(""));

        grandparent
            .join("labels")
            .join(replace_image_extension(&file_name, "txt"))
    }
}

/// Swap a recognized image extension (matched case-insensitively by suffix)
/// for `new_ext`.
pub fn replace_image_extension(name: &str, new_ext: &str) -> String {
    let lower = name.to_ascii_lowercase();
    for ext in IMAGE_EXTENSIONS {
        let suffix = format!(".{ext}");
        if lower.ends_with(&suffix) {
            let stem = &name[..name.len() - suffix.len()];
            return format!("{stem}.{new_ext}");
        }
    }

    // Discovery only hands over recognized image files; anything else keeps
    // its full name.
    format!("{name}.{new_ext}")
}
