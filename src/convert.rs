//! End-to-end conversion from a YOLO dataset to a LabelMe directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use clap::ValueEnum;

use crate::descriptor::Descriptor;
use crate::error::Yolo2LabelmeError;
use crate::geometry;
use crate::labelme::{self, AnnotationDocument, LABELME_VERSION};
use crate::locator;

/// Directory name used when no output directory is given.
pub const DEFAULT_OUTPUT_DIR: &str = "labelmeDataset";

/// What to do when a discovered image has no label file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SkipPolicy {
    /// Abort the run with an error (the default).
    #[default]
    #[value(name = "false")]
    Abort,
    /// Skip the image silently.
    #[value(name = "true")]
    Silent,
    /// Skip the image and print the missing label path.
    #[value(name = "print")]
    Print,
}

/// Options for one conversion run.
#[derive(Clone, Debug)]
pub struct ConvertOptions {
    /// Path to the dataset descriptor (data.yaml).
    pub descriptor_path: PathBuf,
    /// Explicit directory of images, overriding the descriptor's splits.
    pub dataset_dir: Option<PathBuf>,
    /// Output directory; defaults to a sibling [`DEFAULT_OUTPUT_DIR`].
    pub output_dir: Option<PathBuf>,
    /// Missing-label handling.
    pub skip: SkipPolicy,
}

/// Counts reported after a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub converted: usize,
    pub skipped: usize,
}

/// Convert every discovered image of the dataset, sequentially.
///
/// The run aborts at the first fatal error; output files already written by
/// then are left in place (no rollback).
pub fn convert_dataset(options: &ConvertOptions) -> Result<ConvertSummary, Yolo2LabelmeError> {
    let descriptor = Descriptor::load(&options.descriptor_path)?;

    let output_dir = resolve_output_dir(options)?;
    println!("Output will be in {}.", output_dir.display());
    fs::create_dir_all(&output_dir).map_err(Yolo2LabelmeError::Io)?;

    let search_dirs = locator::resolve_search_dirs(
        &options.descriptor_path,
        &descriptor,
        options.dataset_dir.as_deref(),
    )?;

    let mut summary = ConvertSummary::default();

    for dir in &search_dirs {
        for image_path in locator::discover_images(dir)? {
            let label_path = locator::label_path_for(&image_path);

            if !label_path.exists() {
                match options.skip {
                    SkipPolicy::Abort => {
                        return Err(Yolo2LabelmeError::MissingLabel { path: label_path });
                    }
                    SkipPolicy::Silent => {}
                    SkipPolicy::Print => println!("Missing {}", label_path.display()),
                }
                summary.skipped += 1;
                continue;
            }

            convert_image(&image_path, &label_path, &descriptor.names, &output_dir)?;
            summary.converted += 1;
        }
    }

    Ok(summary)
}

/// The output directory a run writes into: the explicit one, or a sibling
/// `labelmeDataset` directory next to the dataset directory (when given) or
/// next to the descriptor.
///
/// The sibling is derived from the lexically absolutized input, so relative
/// CLI arguments land the default next to the real dataset location.
pub fn resolve_output_dir(options: &ConvertOptions) -> Result<PathBuf, Yolo2LabelmeError> {
    if let Some(dir) = &options.output_dir {
        return Ok(dir.clone());
    }

    let anchor = match &options.dataset_dir {
        Some(dataset_dir) => std::path::absolute(dataset_dir),
        None => std::path::absolute(&options.descriptor_path),
    }
    .map_err(Yolo2LabelmeError::Io)?;

    Ok(anchor
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(DEFAULT_OUTPUT_DIR))
}

/// Convert one (image, label) pair: write the annotation JSON and copy the
/// image bytes, both named after the image's base filename. Preexisting
/// output files are overwritten.
fn convert_image(
    image_path: &Path,
    label_path: &Path,
    names: &[String],
    output_dir: &Path,
) -> Result<(), Yolo2LabelmeError> {
    let (width, height) = read_image_dimensions(image_path)?;
    let shapes = geometry::read_label_file(label_path, width, height, names)?;
    let image_bytes = fs::read(image_path).map_err(Yolo2LabelmeError::Io)?;

    let document = AnnotationDocument {
        version: LABELME_VERSION.to_string(),
        flags: BTreeMap::new(),
        shapes,
        image_path: image_path.to_string_lossy().into_owned(),
        image_data: STANDARD.encode(&image_bytes),
        image_height: height,
        image_width: width,
    };

    let file_name = image_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let json_path = output_dir.join(locator::replace_image_extension(&file_name, "json"));
    labelme::write_document(&json_path, &document)?;

    fs::copy(image_path, output_dir.join(&file_name)).map_err(Yolo2LabelmeError::Io)?;

    Ok(())
}

fn read_image_dimensions(path: &Path) -> Result<(u32, u32), Yolo2LabelmeError> {
    let size = imagesize::size(path).map_err(|source| Yolo2LabelmeError::ImageDimensionRead {
        path: path.to_path_buf(),
        source,
    })?;

    let width: u32 = size
        .width
        .try_into()
        .map_err(|_| Yolo2LabelmeError::ImageDimensionInvalid {
            path: path.to_path_buf(),
            message: format!("width {} does not fit in u32", size.width),
        })?;

    let height: u32 = size
        .height
        .try_into()
        .map_err(|_| Yolo2LabelmeError::ImageDimensionInvalid {
            path: path.to_path_buf(),
            message: format!("height {} does not fit in u32", size.height),
        })?;

    Ok((width, height))
}
