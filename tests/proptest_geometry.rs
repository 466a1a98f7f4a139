//! Property tests for the label-line parser and the corner transform.

use std::path::Path;

use proptest::prelude::*;

use yolo2labelme::geometry::{parse_label_line, shape_from_record, YoloRecord};

proptest! {
    #[test]
    fn corners_satisfy_the_transform_identity(
        cx in 0.0f64..=1.0,
        cy in 0.0f64..=1.0,
        w in 0.0f64..=1.0,
        h in 0.0f64..=1.0,
        width in 1u32..=4096,
        height in 1u32..=4096,
    ) {
        let record = YoloRecord { class_id: 0, cx, cy, w, h };
        let shape = shape_from_record(&record, "object".to_string(), width, height);

        let (wf, hf) = (f64::from(width), f64::from(height));
        prop_assert_eq!(shape.points.len(), 2);
        prop_assert_eq!(shape.points[0], ((cx - w / 2.0) * wf, (cy - h / 2.0) * hf));
        prop_assert_eq!(shape.points[1], ((cx + w / 2.0) * wf, (cy + h / 2.0) * hf));
    }

    #[test]
    fn in_bounds_boxes_yield_in_bounds_corners(
        cx in 0.0f64..=1.0,
        cy in 0.0f64..=1.0,
        w in 0.0f64..=1.0,
        h in 0.0f64..=1.0,
        width in 1u32..=4096,
        height in 1u32..=4096,
    ) {
        prop_assume!(cx - w / 2.0 >= 0.0 && cx + w / 2.0 <= 1.0);
        prop_assume!(cy - h / 2.0 >= 0.0 && cy + h / 2.0 <= 1.0);

        let record = YoloRecord { class_id: 0, cx, cy, w, h };
        let shape = shape_from_record(&record, "object".to_string(), width, height);

        let (x_min, y_min) = shape.points[0];
        let (x_max, y_max) = shape.points[1];
        prop_assert!(x_min >= 0.0 && x_max <= f64::from(width));
        prop_assert!(y_min >= 0.0 && y_max <= f64::from(height));
        prop_assert!(x_min <= x_max);
        prop_assert!(y_min <= y_max);
    }

    #[test]
    fn formatted_label_lines_parse_back(
        class_id in 0usize..100,
        cx in 0.0f64..=1.0,
        cy in 0.0f64..=1.0,
        w in 0.0f64..=1.0,
        h in 0.0f64..=1.0,
    ) {
        let line = format!("{} {} {} {} {}", class_id, cx, cy, w, h);
        let parsed = parse_label_line(&line, Path::new("prop.txt"), 1)
            .expect("parse should succeed")
            .expect("line should produce a record");

        prop_assert_eq!(parsed, YoloRecord { class_id, cx, cy, w, h });
    }
}
