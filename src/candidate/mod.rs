//! Candidate types and the selection primitives shared by both pipelines.
//!
//! Detection candidates go through sorting and greedy IoU suppression;
//! classification candidates go through sorting and Top-K truncation. Both
//! use the same descending-confidence order with an index tie-break.

pub(crate) mod nms;
pub(crate) mod sort;
pub(crate) mod topk;

use crate::geometry::BoundingBox;

/// Detection decoded from one row of the raw score buffer.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredBox {
    /// Normalized box, `top < bottom` and `left < right`.
    pub bbox: BoundingBox,
    /// Label of the best-scoring class.
    pub label: String,
    /// Index of the best-scoring class in the label table.
    pub class_index: usize,
    /// Raw score of the best class.
    pub confidence: f32,
    /// Row of the raw buffer this detection was decoded from.
    pub row: usize,
}

/// One category of a classification ranking.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedCategory {
    pub category: String,
    /// Position of the score in the classifier output.
    pub index: usize,
    pub confidence: f32,
}

/// Access to the ordering key of a candidate.
pub trait Ranked {
    /// Score used for descending order.
    fn confidence(&self) -> f32;
    /// Original position, used to break ties in ascending order.
    fn source_index(&self) -> usize;
}

impl Ranked for ScoredBox {
    fn confidence(&self) -> f32 {
        self.confidence
    }

    fn source_index(&self) -> usize {
        self.row
    }
}

impl Ranked for RankedCategory {
    fn confidence(&self) -> f32 {
        self.confidence
    }

    fn source_index(&self) -> usize {
        self.index
    }
}
