//! Top-K selection for classifier output.

use crate::buffer::ScoreBuffer;
use crate::candidate::sort::sort_desc;
use crate::candidate::{Ranked, RankedCategory};
use crate::labels::LabelTable;
use crate::trace::{trace_event, trace_reject};
use crate::util::{PostRankError, PostRankResult};

/// Largest accepted `top` value.
pub const MAX_TOP: usize = 1000;

/// Checks that `top` lies in `[0, MAX_TOP]`.
///
/// Out-of-range values fail; they are never clamped to a default.
pub fn validate_top(top: usize) -> PostRankResult<usize> {
    if top > MAX_TOP {
        let err = PostRankError::OutOfRange {
            name: "top",
            value: top as f64,
            min: 0.0,
            max: MAX_TOP as f64,
        };
        trace_reject!(err);
        return Err(err);
    }
    Ok(top)
}

/// Sorts candidates and keeps the first `top`.
///
/// Returns every candidate when fewer than `top` are available.
pub fn select_top_k<T: Ranked>(mut items: Vec<T>, top: usize) -> PostRankResult<Vec<T>> {
    let top = validate_top(top)?;
    sort_desc(&mut items);
    items.truncate(top);
    Ok(items)
}

/// Pairs each score with its label and returns the `top` best categories.
pub fn rank_scores(
    scores: &[f32],
    labels: &LabelTable,
    top: usize,
) -> PostRankResult<Vec<RankedCategory>> {
    validate_top(top)?;
    let view = ScoreBuffer::single_row(scores)?;
    if labels.len() < view.row_width() {
        return Err(PostRankError::InvalidInputShape {
            len: labels.len(),
            row_width: view.row_width(),
            reason: "label table is shorter than the score vector",
        });
    }

    let categories: Vec<RankedCategory> = view
        .as_slice()
        .iter()
        .zip(labels.iter())
        .enumerate()
        .map(|(index, (&confidence, label))| RankedCategory {
            category: label.to_owned(),
            index,
            confidence,
        })
        .collect();

    let ranked = select_top_k(categories, top)?;
    trace_event!("ranked_categories", count = ranked.len());
    Ok(ranked)
}
