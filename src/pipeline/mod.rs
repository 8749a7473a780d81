//! Caller-owned post-processing handles.
//!
//! A handle owns its label table and thresholds, so callers keep one per model
//! and reuse it across inference runs. Handles hold no per-run state; a shared
//! reference can post-process independent buffers from several threads.

mod classifier;
mod detector;
mod emotion;

pub use classifier::Classifier;
pub use detector::Detector;
pub use emotion::{DetectedEmotion, EmotionRecognizer};

use crate::candidate::nms::DEFAULT_IOU_THRESHOLD;
use crate::candidate::topk::validate_top;
use crate::decode::DEFAULT_CONFIDENCE_THRESHOLD;
use crate::geometry::BoxLayout;
use crate::util::math::check_unit;
use crate::util::PostRankResult;

/// Thresholds and row layout for object detection.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DetectionConfig {
    /// A row becomes a detection only if its best class score exceeds this.
    pub confidence_threshold: f32,
    /// Boxes overlapping a kept box by more than this IoU are suppressed.
    pub iou_threshold: f32,
    /// Order of the four box coordinates at the start of each row.
    pub box_layout: BoxLayout,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            iou_threshold: DEFAULT_IOU_THRESHOLD,
            box_layout: BoxLayout::TopLeftBottomRight,
        }
    }
}

impl DetectionConfig {
    /// Checks that both thresholds lie in `[0, 1]`.
    pub fn validate(&self) -> PostRankResult<()> {
        check_unit("confidence_threshold", self.confidence_threshold)?;
        check_unit("iou_threshold", self.iou_threshold)
    }
}

/// Ranking depth for classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassifyConfig {
    /// Number of categories to return, in `[0, 1000]`.
    pub top: usize,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self { top: 3 }
    }
}

impl ClassifyConfig {
    pub fn validate(&self) -> PostRankResult<()> {
        validate_top(self.top).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassifyConfig, DetectionConfig};
    use crate::geometry::BoxLayout;
    use crate::PostRankError;

    #[test]
    fn defaults_match_detector_constants() {
        let cfg = DetectionConfig::default();
        assert_eq!(cfg.confidence_threshold, 0.5);
        assert_eq!(cfg.iou_threshold, 0.45);
        assert_eq!(cfg.box_layout, BoxLayout::TopLeftBottomRight);
        assert_eq!(ClassifyConfig::default().top, 3);
    }

    #[test]
    fn thresholds_outside_unit_interval_fail() {
        let cfg = DetectionConfig {
            iou_threshold: 1.5,
            ..DetectionConfig::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(matches!(
            err,
            PostRankError::OutOfRange {
                name: "iou_threshold",
                ..
            }
        ));

        let cfg = DetectionConfig {
            confidence_threshold: f32::NAN,
            ..DetectionConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn classify_top_is_bounded() {
        assert!(ClassifyConfig { top: 1000 }.validate().is_ok());
        assert!(ClassifyConfig { top: 1001 }.validate().is_err());
    }
}
