//! Small numeric helpers shared by the decoders.

use crate::util::{PostRankError, PostRankResult};

/// Returns the index and value of the largest element.
///
/// Ties keep the lowest index. NaN entries never win. Returns `None` for an
/// empty slice or one containing only NaN.
pub(crate) fn argmax(values: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (idx, &value) in values.iter().enumerate() {
        if value.is_nan() {
            continue;
        }
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((idx, value)),
        }
    }
    best
}

/// Returns true when `value` lies in the closed unit interval.
pub(crate) fn in_unit_interval(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Checks that a threshold named `name` lies in `[0, 1]`. NaN fails.
pub(crate) fn check_unit(name: &'static str, value: f32) -> PostRankResult<()> {
    if in_unit_interval(value) {
        Ok(())
    } else {
        Err(PostRankError::OutOfRange {
            name,
            value: value as f64,
            min: 0.0,
            max: 1.0,
        })
    }
}
