//! Detection handle: decode, filter, sort and suppress.

use crate::buffer::ScoreBuffer;
use crate::candidate::nms::sort_and_suppress;
use crate::candidate::ScoredBox;
use crate::decode::decode_detections;
use crate::labels::LabelTable;
use crate::pipeline::DetectionConfig;
use crate::trace::{trace_event, trace_span};
use crate::util::PostRankResult;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Object-detection post-processor: decode, filter, sort, suppress.
#[derive(Clone, Debug)]
pub struct Detector {
    labels: LabelTable,
    cfg: DetectionConfig,
}

impl Detector {
    /// Creates a detector with default thresholds.
    pub fn new(labels: LabelTable) -> Self {
        Self {
            labels,
            cfg: DetectionConfig::default(),
        }
    }

    /// Creates a detector for the 80-class COCO model.
    pub fn coco() -> Self {
        Self::new(LabelTable::coco())
    }

    /// Replaces the configuration after validating it.
    pub fn with_config(mut self, cfg: DetectionConfig) -> PostRankResult<Self> {
        cfg.validate()?;
        self.cfg = cfg;
        Ok(self)
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.cfg
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Row width implied by the label table: four box values plus one score
    /// per class.
    pub fn row_width(&self) -> usize {
        crate::buffer::BOX_COORDS + self.labels.len()
    }

    /// Post-processes one flat detector output whose rows match `row_width()`.
    pub fn detect(&self, raw: &[f32]) -> PostRankResult<Vec<ScoredBox>> {
        self.detect_rows(raw, self.row_width())
    }

    /// Post-processes a detector output with an explicit row width.
    pub fn detect_rows(&self, raw: &[f32], row_width: usize) -> PostRankResult<Vec<ScoredBox>> {
        let _span = trace_span!("detect", len = raw.len(), row_width = row_width).entered();
        let buffer = ScoreBuffer::detections(raw, row_width)?;
        let candidates = decode_detections(
            buffer,
            &self.labels,
            self.cfg.confidence_threshold,
            self.cfg.box_layout,
        )?;
        let kept = sort_and_suppress(candidates, self.cfg.iou_threshold)?;
        trace_event!("detections", count = kept.len());
        Ok(kept)
    }

    /// Post-processes independent outputs, one result per buffer.
    ///
    /// With the `rayon` feature the buffers are spread over the rayon pool;
    /// each buffer is still processed sequentially.
    pub fn detect_batch(&self, raws: &[&[f32]]) -> Vec<PostRankResult<Vec<ScoredBox>>> {
        #[cfg(feature = "rayon")]
        {
            raws.par_iter().map(|raw| self.detect(raw)).collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            raws.iter().map(|raw| self.detect(raw)).collect()
        }
    }
}
