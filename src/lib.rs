//! yolo2labelme: convert YOLO bounding-box datasets to LabelMe JSON.
//!
//! The converter walks the split directories named by a YOLO dataset
//! descriptor (`data.yaml`), pairs every discovered image with its label
//! file, and writes one LabelMe annotation document plus a byte-identical
//! copy of the image into the output directory.
//!
//! # Modules
//!
//! - [`descriptor`]: dataset descriptor (data.yaml) loading
//! - [`locator`]: search-root resolution and image-to-label path matching
//! - [`geometry`]: YOLO label parsing and the pixel-space corner transform
//! - [`labelme`]: the typed LabelMe output schema
//! - [`convert`]: the end-to-end conversion driver
//! - [`error`]: error types for yolo2labelme operations

pub mod convert;
pub mod descriptor;
pub mod error;
pub mod geometry;
pub mod labelme;
pub mod locator;

use std::path::PathBuf;

use clap::Parser;

pub use convert::{convert_dataset, ConvertOptions, ConvertSummary, SkipPolicy};
pub use error::Yolo2LabelmeError;

/// The yolo2labelme CLI application.
#[derive(Parser)]
#[command(name = "yolo2labelme")]
#[command(version, author, about)]
struct Cli {
    /// Path to the YOLO dataset descriptor (data.yaml).
    dataset_yaml: PathBuf,

    /// Directory of images to convert, overriding the descriptor's splits.
    #[arg(long)]
    dataset_dir: Option<PathBuf>,

    /// Output directory (default: a sibling 'labelmeDataset' directory).
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Missing-label handling: abort ('false'), skip silently ('true'),
    /// or skip and report ('print').
    #[arg(long, value_enum, default_value = "false")]
    skip: SkipPolicy,
}

/// Run the yolo2labelme CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), Yolo2LabelmeError> {
    let cli = Cli::parse();

    let options = ConvertOptions {
        descriptor_path: cli.dataset_yaml,
        dataset_dir: cli.dataset_dir,
        output_dir: cli.output_dir,
        skip: cli.skip,
    };

    let summary = convert_dataset(&options)?;
    println!(
        "Converted {} image(s), skipped {}.",
        summary.converted, summary.skipped
    );

    Ok(())
}
