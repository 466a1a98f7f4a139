use std::path::PathBuf;
use thiserror::Error;

/// The main error type for yolo2labelme operations.
#[derive(Debug, Error)]
pub enum Yolo2LabelmeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset descriptor {path}: {source}")]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error(
        "No dataset directory given and {descriptor} defines none of the \
         test/train/val split directories"
    )]
    NoSearchDirs { descriptor: PathBuf },

    #[error(
        "Expected label file {path} to exist. Pass --skip true to skip such \
         images silently, or --skip print to report them and continue."
    )]
    MissingLabel { path: PathBuf },

    #[error("Failed to parse label file {path} at line {line}: {message}")]
    LabelParse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Failed to read image dimensions from {path}: {source}")]
    ImageDimensionRead {
        path: PathBuf,
        #[source]
        source: imagesize::ImageError,
    },

    #[error("Image {path} has invalid dimensions: {message}")]
    ImageDimensionInvalid { path: PathBuf, message: String },

    #[error("Failed to write annotation JSON to {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
