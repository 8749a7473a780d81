//! Greedy IoU-based non-maximum suppression for detections.

use crate::candidate::sort::sort_desc;
use crate::candidate::ScoredBox;
use crate::geometry::iou;
use crate::trace::{trace_event, trace_span};
use crate::util::math::check_unit;
use crate::util::PostRankResult;

/// Default IoU above which a lower-confidence box counts as a duplicate.
pub const DEFAULT_IOU_THRESHOLD: f32 = 0.45;

/// Applies greedy non-maximum suppression to boxes sorted by confidence.
///
/// Each box is kept unless its IoU with an already kept box exceeds
/// `iou_threshold`. Kept boxes are returned unmodified and in input order.
/// A threshold outside `[0, 1]` fails with `OutOfRange`.
pub fn nms(sorted: &[ScoredBox], iou_threshold: f32) -> PostRankResult<Vec<ScoredBox>> {
    let _span = trace_span!("nms", candidates = sorted.len()).entered();
    check_unit("iou_threshold", iou_threshold)?;
    let mut kept: Vec<ScoredBox> = Vec::new();

    'outer: for candidate in sorted {
        for kept_box in kept.iter() {
            if iou(&kept_box.bbox, &candidate.bbox)? > iou_threshold {
                continue 'outer;
            }
        }
        kept.push(candidate.clone());
    }

    trace_event!("nms_kept", kept = kept.len(), dropped = sorted.len() - kept.len());
    Ok(kept)
}

/// Sorts boxes by descending confidence, then suppresses duplicates.
pub fn sort_and_suppress(
    mut boxes: Vec<ScoredBox>,
    iou_threshold: f32,
) -> PostRankResult<Vec<ScoredBox>> {
    sort_desc(&mut boxes);
    nms(&boxes, iou_threshold)
}

#[cfg(test)]
mod tests {
    use super::{nms, sort_and_suppress, DEFAULT_IOU_THRESHOLD};
    use crate::candidate::ScoredBox;
    use crate::geometry::BoundingBox;
    use crate::PostRankError;

    fn scored(row: usize, coords: [f32; 4], confidence: f32) -> ScoredBox {
        ScoredBox {
            bbox: BoundingBox::new(coords[0], coords[1], coords[2], coords[3]).unwrap(),
            label: "person".into(),
            class_index: 0,
            confidence,
            row,
        }
    }

    #[test]
    fn nested_lower_box_is_suppressed() {
        let boxes = vec![
            scored(0, [0.0, 0.0, 1.0, 1.0], 0.9),
            scored(1, [0.0, 0.0, 0.9, 0.9], 0.8),
        ];
        let kept = nms(&boxes, DEFAULT_IOU_THRESHOLD).unwrap();
        assert_eq!(kept, vec![boxes[0].clone()]);
    }

    #[test]
    fn disjoint_boxes_all_survive() {
        let boxes = vec![
            scored(0, [0.0, 0.0, 0.3, 0.3], 0.9),
            scored(1, [0.5, 0.5, 0.9, 0.9], 0.8),
        ];
        assert_eq!(nms(&boxes, DEFAULT_IOU_THRESHOLD).unwrap().len(), 2);
    }

    #[test]
    fn identical_boxes_keep_the_first() {
        let boxes = vec![
            scored(0, [0.1, 0.1, 0.4, 0.4], 0.7),
            scored(1, [0.1, 0.1, 0.4, 0.4], 0.7),
        ];
        let kept = nms(&boxes, DEFAULT_IOU_THRESHOLD).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].row, 0);
    }

    #[test]
    fn threshold_controls_suppression() {
        // iou of these two boxes is exactly 1/3
        let boxes = vec![
            scored(0, [0.0, 0.0, 1.0, 0.5], 0.9),
            scored(1, [0.0, 0.25, 1.0, 0.75], 0.8),
        ];
        assert_eq!(nms(&boxes, 0.5).unwrap().len(), 2);
        assert_eq!(nms(&boxes, 0.3).unwrap().len(), 1);
    }

    #[test]
    fn sort_and_suppress_prefers_higher_confidence() {
        let boxes = vec![
            scored(0, [0.0, 0.0, 0.9, 0.9], 0.6),
            scored(1, [0.0, 0.0, 1.0, 1.0], 0.95),
        ];
        let kept = sort_and_suppress(boxes, DEFAULT_IOU_THRESHOLD).unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].row, 1);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(nms(&[], DEFAULT_IOU_THRESHOLD).unwrap().is_empty());
    }

    #[test]
    fn iou_threshold_outside_unit_interval_is_rejected() {
        let boxes = vec![
            scored(0, [0.0, 0.0, 0.5, 0.5], 0.9),
            scored(1, [0.5, 0.5, 1.0, 1.0], 0.6),
        ];
        for threshold in [-1.0f32, f32::NAN, 7.0] {
            let err = nms(&boxes, threshold).unwrap_err();
            assert!(matches!(
                err,
                PostRankError::OutOfRange {
                    name: "iou_threshold",
                    ..
                }
            ));
            assert!(sort_and_suppress(boxes.clone(), threshold).is_err());
        }
    }
}
