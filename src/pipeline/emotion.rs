//! Emotion handle picking the strongest class for a detected face.

use crate::candidate::topk::rank_scores;
use crate::candidate::RankedCategory;
use crate::geometry::FaceBox;
use crate::labels::LabelTable;
use crate::trace::{trace_event, trace_span};
use crate::util::math::argmax;
use crate::util::{PostRankError, PostRankResult};

/// Emotion recognized on one face.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectedEmotion {
    /// Position of the winning score in the classifier output.
    pub index: usize,
    pub emotion: String,
    /// Raw score of the winning class (not a probability).
    pub confidence: f32,
    /// Face region reported by the external face detector.
    pub face: FaceBox,
}

/// Facial-emotion post-processor.
///
/// Picks the arg-max of the classifier output computed on a cropped face.
#[derive(Clone, Debug)]
pub struct EmotionRecognizer {
    labels: LabelTable,
}

impl Default for EmotionRecognizer {
    fn default() -> Self {
        Self::new(LabelTable::emotions())
    }
}

impl EmotionRecognizer {
    pub fn new(labels: LabelTable) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Returns the strongest emotion for `face`, or `None` without a face.
    pub fn recognize(
        &self,
        scores: &[f32],
        face: Option<FaceBox>,
    ) -> PostRankResult<Option<DetectedEmotion>> {
        let _span = trace_span!("recognize_emotion", len = scores.len()).entered();
        let Some(face) = face else {
            return Ok(None);
        };
        self.check_shape(scores)?;

        let (index, confidence) = argmax(scores).ok_or(PostRankError::InvalidInputShape {
            len: scores.len(),
            row_width: scores.len(),
            reason: "emotion scores contain no comparable value",
        })?;
        let emotion = self
            .labels
            .get(index)
            .ok_or(PostRankError::InvalidInputShape {
                len: self.labels.len(),
                row_width: scores.len(),
                reason: "emotion index has no label",
            })?
            .to_owned();

        trace_event!("emotion", index = index);
        Ok(Some(DetectedEmotion {
            index,
            emotion,
            confidence,
            face,
        }))
    }

    /// Ranks every emotion by score, strongest first.
    pub fn rank(&self, scores: &[f32]) -> PostRankResult<Vec<RankedCategory>> {
        self.check_shape(scores)?;
        rank_scores(scores, &self.labels, scores.len())
    }

    fn check_shape(&self, scores: &[f32]) -> PostRankResult<()> {
        if scores.is_empty() || scores.len() > self.labels.len() {
            return Err(PostRankError::InvalidInputShape {
                len: scores.len(),
                row_width: self.labels.len(),
                reason: "emotion scores must be non-empty and fit the label table",
            });
        }
        Ok(())
    }
}
