//! Axis-aligned box geometry in normalized image coordinates.
//!
//! Boxes are stored as `(top, left, bottom, right)` with every coordinate a
//! fraction of the image height or width. A valid box has `top < bottom` and
//! `left < right`; an inverted box is a contract violation and is rejected
//! rather than repaired.

pub(crate) mod overlap;

use crate::util::{PostRankError, PostRankResult};

pub use overlap::iou;

/// Order in which a model emits the four coordinates at the start of a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BoxLayout {
    /// `[top, left, bottom, right]`, the YOLOv4 export layout.
    #[default]
    TopLeftBottomRight,
    /// `[left, top, right, bottom]`, also known as `xyxy`.
    LeftTopRightBottom,
}

impl BoxLayout {
    /// Reads a box from the four leading values of a candidate row.
    pub fn read(self, coords: [f32; 4]) -> BoundingBox {
        let [a, b, c, d] = coords;
        match self {
            BoxLayout::TopLeftBottomRight => BoundingBox {
                top: a,
                left: b,
                bottom: c,
                right: d,
            },
            BoxLayout::LeftTopRightBottom => BoundingBox {
                top: b,
                left: a,
                bottom: d,
                right: c,
            },
        }
    }
}

/// Normalized axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl BoundingBox {
    /// Creates a box after checking `top < bottom` and `left < right`.
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> PostRankResult<Self> {
        let bbox = Self {
            top,
            left,
            bottom,
            right,
        };
        bbox.validate()?;
        Ok(bbox)
    }

    /// Checks the ordering invariant. Non-finite coordinates also fail.
    pub fn validate(&self) -> PostRankResult<()> {
        if !(self.top.is_finite()
            && self.left.is_finite()
            && self.bottom.is_finite()
            && self.right.is_finite())
        {
            return Err(PostRankError::GeometryInvariantViolation {
                reason: "non-finite box coordinate",
                value: f32::NAN,
            });
        }
        if self.top >= self.bottom {
            return Err(PostRankError::GeometryInvariantViolation {
                reason: "box top must be above bottom",
                value: self.bottom - self.top,
            });
        }
        if self.left >= self.right {
            return Err(PostRankError::GeometryInvariantViolation {
                reason: "box left must be before right",
                value: self.right - self.left,
            });
        }
        Ok(())
    }

    /// Box width in normalized units.
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Box height in normalized units.
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Projects the box into an image of `width x height` pixels.
    ///
    /// Coordinates are truncated toward zero, matching how the overlay code
    /// casts scaled floats to integer pixel positions.
    pub fn to_pixels(&self, width: u32, height: u32) -> PixelRect {
        let w = width as f32;
        let h = height as f32;
        let left = (self.left * w) as i32;
        let top = (self.top * h) as i32;
        let right = (self.right * w) as i32;
        let bottom = (self.bottom * h) as i32;
        PixelRect {
            x: left,
            y: top,
            width: (right - left).max(0) as u32,
            height: (bottom - top).max(0) as u32,
        }
    }
}

/// Box in pixel space, anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Face region reported by an external face detector, in pixels.
///
/// The core never computes face geometry; it only carries the box alongside
/// the emotion that was recognized inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaceBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}
