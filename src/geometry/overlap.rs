//! Intersection-over-union for normalized boxes.

use crate::geometry::BoundingBox;
use crate::util::math::in_unit_interval;
use crate::util::{PostRankError, PostRankResult};

/// Computes the intersection-over-union of two boxes.
///
/// Both boxes must satisfy `top < bottom` and `left < right`. Disjoint boxes
/// return 0 without dividing. A ratio outside `[0, 1]` means the input was
/// malformed and is reported as an error instead of being clamped.
///
/// Areas are accumulated in `f64` so tiny valid boxes do not underflow to a
/// zero union.
pub fn iou(a: &BoundingBox, b: &BoundingBox) -> PostRankResult<f32> {
    a.validate()?;
    b.validate()?;

    let x_left = a.left.max(b.left);
    let y_top = a.top.max(b.top);
    let x_right = a.right.min(b.right);
    let y_bottom = a.bottom.min(b.bottom);

    if x_right < x_left || y_bottom < y_top {
        return Ok(0.0);
    }

    let intersection = span(x_left, x_right) * span(y_top, y_bottom);
    let union = area_f64(a) + area_f64(b) - intersection;
    if union <= 0.0 {
        return Err(PostRankError::GeometryInvariantViolation {
            reason: "iou union is not positive",
            value: union as f32,
        });
    }
    let ratio = (intersection / union) as f32;

    if !in_unit_interval(ratio) {
        return Err(PostRankError::GeometryInvariantViolation {
            reason: "iou outside [0, 1]",
            value: ratio,
        });
    }
    Ok(ratio)
}

fn span(lo: f32, hi: f32) -> f64 {
    f64::from(hi) - f64::from(lo)
}

fn area_f64(bbox: &BoundingBox) -> f64 {
    span(bbox.left, bbox.right) * span(bbox.top, bbox.bottom)
}
