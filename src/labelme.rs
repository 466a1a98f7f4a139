//! Typed LabelMe annotation schema and JSON writing.
//!
//! Field declaration order matches the key order LabelMe itself emits, so
//! serialized documents read naturally in a diff.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Yolo2LabelmeError;

/// LabelMe format version written to every annotation document.
pub const LABELME_VERSION: &str = "5.2.1";

/// One annotated shape. Only axis-aligned rectangles are produced, as two
/// corner points: top-left then bottom-right.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub label: String,
    pub points: Vec<(f64, f64)>,
    pub group_id: Option<i64>,
    pub description: String,
    pub shape_type: String,
    pub flags: BTreeMap<String, bool>,
}

/// The full annotation document written per image.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationDocument {
    pub version: String,
    pub flags: BTreeMap<String, bool>,
    pub shapes: Vec<Shape>,
    pub image_path: String,
    /// Base64-encoded source image bytes.
    pub image_data: String,
    pub image_height: u32,
    pub image_width: u32,
}

/// Write an annotation document as JSON.
pub fn write_document(path: &Path, document: &AnnotationDocument) -> Result<(), Yolo2LabelmeError> {
    let file = File::create(path).map_err(Yolo2LabelmeError::Io)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, document).map_err(|source| {
        Yolo2LabelmeError::JsonWrite {
            path: path.to_path_buf(),
            source,
        }
    })
}
