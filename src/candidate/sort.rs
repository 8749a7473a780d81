//! Descending-confidence ordering with a deterministic tie-break.

use std::cmp::Ordering;

use crate::candidate::Ranked;

// NaN scores sort after every real score, matching `argmax`, which never
// picks a NaN.
fn ranked_cmp_desc<T: Ranked>(a: &T, b: &T) -> Ordering {
    let (a_score, b_score) = (a.confidence(), b.confidence());
    let by_score = match (a_score.is_nan(), b_score.is_nan()) {
        (false, false) => b_score.total_cmp(&a_score),
        (a_nan, b_nan) => a_nan.cmp(&b_nan),
    };
    by_score.then_with(|| a.source_index().cmp(&b.source_index()))
}

/// Sorts candidates by descending confidence, ties by ascending source index.
///
/// NaN confidences go last, in source order.
pub fn sort_desc<T: Ranked>(items: &mut [T]) {
    items.sort_by(ranked_cmp_desc);
}
