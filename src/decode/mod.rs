//! Decoding of raw detector rows into scored boxes.
//!
//! Every row of the buffer holds four box coordinates followed by one raw score
//! per class. The best class of a row is a plain arg-max over those scores; the
//! score is used as the confidence without a softmax. Rows whose best score
//! does not exceed the confidence threshold are dropped.

use crate::buffer::{ScoreBuffer, BOX_COORDS};
use crate::candidate::ScoredBox;
use crate::geometry::BoxLayout;
use crate::labels::LabelTable;
use crate::trace::{trace_event, trace_reject, trace_span};
use crate::util::math::{argmax, check_unit};
use crate::util::{PostRankError, PostRankResult};

/// Default minimum best-class score for a row to become a detection.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f32 = 0.5;

/// Decodes and filters detection rows.
///
/// Output is in row order; sorting happens in a separate step. A threshold
/// outside `[0, 1]` fails with `OutOfRange`.
pub fn decode_detections(
    buffer: ScoreBuffer<'_>,
    labels: &LabelTable,
    confidence_threshold: f32,
    layout: BoxLayout,
) -> PostRankResult<Vec<ScoredBox>> {
    let _span = trace_span!("decode_detections", rows = buffer.num_rows()).entered();
    check_unit("confidence_threshold", confidence_threshold)?;

    let num_classes = buffer.num_classes();
    if num_classes == 0 {
        return Err(PostRankError::InvalidInputShape {
            len: buffer.as_slice().len(),
            row_width: buffer.row_width(),
            reason: "detection rows need at least one class score",
        });
    }
    if labels.len() < num_classes {
        let err = PostRankError::InvalidInputShape {
            len: labels.len(),
            row_width: buffer.row_width(),
            reason: "label table is shorter than the class count",
        };
        trace_reject!(err);
        return Err(err);
    }

    let mut out = Vec::new();
    for (row_idx, row) in buffer.rows().enumerate() {
        let (coords, class_scores) = row.split_at(BOX_COORDS);
        let Some((class_index, confidence)) = argmax(class_scores) else {
            continue;
        };
        if confidence <= confidence_threshold {
            continue;
        }

        let bbox = layout.read([coords[0], coords[1], coords[2], coords[3]]);
        if let Err(err) = bbox.validate() {
            trace_reject!(err);
            return Err(err);
        }
        let label = labels
            .get(class_index)
            .ok_or(PostRankError::InvalidInputShape {
                len: labels.len(),
                row_width: buffer.row_width(),
                reason: "class index has no label",
            })?;

        out.push(ScoredBox {
            bbox,
            label: label.to_owned(),
            class_index,
            confidence,
            row: row_idx,
        });
    }

    trace_event!("decoded_detections", count = out.len());
    Ok(out)
}
