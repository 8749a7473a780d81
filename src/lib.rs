//! Postrank turns raw neural-network output into ranked, deduplicated results.
//!
//! The crate covers the post-processing that follows an inference call:
//! decoding detector rows into scored boxes, confidence filtering, greedy
//! IoU-based non-maximum suppression, and Top-K ranking of classifier scores.
//! Model loading, image handling and inference itself stay with the caller.
//! Optional features add batch parallelism (`rayon`), spans (`tracing`) and
//! JSON label files plus serializable results (`serde`).

mod buffer;
mod candidate;
mod decode;
pub mod geometry;
pub mod labels;
pub mod pipeline;
mod trace;
pub mod util;

pub use buffer::{ScoreBuffer, BOX_COORDS};
pub use candidate::nms::{nms, sort_and_suppress, DEFAULT_IOU_THRESHOLD};
pub use candidate::sort::sort_desc;
pub use candidate::topk::{rank_scores, select_top_k, validate_top, MAX_TOP};
pub use candidate::{Ranked, RankedCategory, ScoredBox};
pub use decode::{decode_detections, DEFAULT_CONFIDENCE_THRESHOLD};
pub use geometry::{iou, BoundingBox, BoxLayout, FaceBox, PixelRect};
pub use labels::LabelTable;
pub use pipeline::{
    Classifier, ClassifyConfig, DetectedEmotion, DetectionConfig, Detector, EmotionRecognizer,
};
pub use util::{PostRankError, PostRankResult};
