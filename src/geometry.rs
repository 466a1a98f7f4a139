//! YOLO label parsing and the normalized-to-pixel corner transform.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::Yolo2LabelmeError;
use crate::labelme::Shape;

/// One parsed line of a YOLO label file. Coordinates are normalized to
/// [0, 1] relative to the image dimensions, center/size convention.
#[derive(Debug, PartialEq)]
pub struct YoloRecord {
    pub class_id: usize,
    pub cx: f64,
    pub cy: f64,
    pub w: f64,
    pub h: f64,
}

/// Parse one label line. Blank lines yield `Ok(None)` and are not counted
/// as records.
pub fn parse_label_line(
    line: &str,
    file_path: &Path,
    line_num: usize,
) -> Result<Option<YoloRecord>, Yolo2LabelmeError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    // Take at most 6 tokens so pathological inputs do not allocate unbounded memory.
    let tokens: Vec<&str> = trimmed.split_whitespace().take(6).collect();

    if tokens.len() < 5 {
        return Err(Yolo2LabelmeError::LabelParse {
            path: file_path.to_path_buf(),
            line: line_num,
            message: format!("expected 5 tokens, found {}", tokens.len()),
        });
    }

    if tokens.len() > 5 {
        return Err(Yolo2LabelmeError::LabelParse {
            path: file_path.to_path_buf(),
            line: line_num,
            message: "segmentation/pose annotations not supported; only bounding boxes are handled"
                .to_string(),
        });
    }

    let class_id = tokens[0]
        .parse::<usize>()
        .map_err(|_| Yolo2LabelmeError::LabelParse {
            path: file_path.to_path_buf(),
            line: line_num,
            message: format!(
                "invalid class_id '{}'; expected non-negative integer",
                tokens[0]
            ),
        })?;

    let cx = parse_f64_token(tokens[1], "x_center", file_path, line_num)?;
    let cy = parse_f64_token(tokens[2], "y_center", file_path, line_num)?;
    let w = parse_f64_token(tokens[3], "width", file_path, line_num)?;
    let h = parse_f64_token(tokens[4], "height", file_path, line_num)?;

    Ok(Some(YoloRecord {
        class_id,
        cx,
        cy,
        w,
        h,
    }))
}

fn parse_f64_token(
    raw: &str,
    field_name: &str,
    file_path: &Path,
    line_num: usize,
) -> Result<f64, Yolo2LabelmeError> {
    raw.parse::<f64>()
        .map_err(|_| Yolo2LabelmeError::LabelParse {
            path: file_path.to_path_buf(),
            line: line_num,
            message: format!("invalid {field_name} '{raw}'; expected floating-point number"),
        })
}

/// Convert one record into a LabelMe rectangle in pixel space.
///
/// Points are emitted top-left then bottom-right by construction; corners
/// of malformed input (for example a negative width) are passed through
/// unreordered.
pub fn shape_from_record(record: &YoloRecord, label: String, width: u32, height: u32) -> Shape {
    let (width, height) = (f64::from(width), f64::from(height));

    let x_min = (record.cx - record.w / 2.0) * width;
    let y_min = (record.cy - record.h / 2.0) * height;
    let x_max = (record.cx + record.w / 2.0) * width;
    let y_max = (record.cy + record.h / 2.0) * height;

    Shape {
        label,
        points: vec![(x_min, y_min), (x_max, y_max)],
        group_id: None,
        description: String::new(),
        shape_type: "rectangle".to_string(),
        flags: BTreeMap::new(),
    }
}

/// Read a label file and convert every record, in file order.
///
/// A class id with no entry in `names` aborts with a parse error naming the
/// offending line.
pub fn read_label_file(
    path: &Path,
    width: u32,
    height: u32,
    names: &[String],
) -> Result<Vec<Shape>, Yolo2LabelmeError> {
    let content = fs::read_to_string(path).map_err(Yolo2LabelmeError::Io)?;
    let mut shapes = Vec::new();

    for (line_idx, line) in content.lines().enumerate() {
        let line_num = line_idx + 1;
        let Some(record) = parse_label_line(line, path, line_num)? else {
            continue;
        };

        let label = names.get(record.class_id).cloned().ok_or_else(|| {
            Yolo2LabelmeError::LabelParse {
                path: path.to_path_buf(),
                line: line_num,
                message: format!(
                    "class_id {} is out of range for class map with {} class(es)",
                    record.class_id,
                    names.len()
                ),
            }
        })?;

        shapes.push(shape_from_record(&record, label, width, height));
    }

    Ok(shapes)
}
