//! Classification handle returning the best-scoring categories.

use crate::candidate::topk::rank_scores;
use crate::candidate::RankedCategory;
use crate::labels::LabelTable;
use crate::pipeline::ClassifyConfig;
use crate::trace::trace_span;
use crate::util::PostRankResult;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Image-classification post-processor returning the best categories.
#[derive(Clone, Debug)]
pub struct Classifier {
    labels: LabelTable,
    cfg: ClassifyConfig,
}

impl Classifier {
    pub fn new(labels: LabelTable) -> Self {
        Self {
            labels,
            cfg: ClassifyConfig::default(),
        }
    }

    /// Replaces the configuration after validating it.
    pub fn with_config(mut self, cfg: ClassifyConfig) -> PostRankResult<Self> {
        cfg.validate()?;
        self.cfg = cfg;
        Ok(self)
    }

    pub fn config(&self) -> &ClassifyConfig {
        &self.cfg
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Ranks `scores` and keeps the configured number of categories.
    pub fn classify(&self, scores: &[f32]) -> PostRankResult<Vec<RankedCategory>> {
        self.classify_top(scores, self.cfg.top)
    }

    /// Ranks `scores` and keeps `top` categories; `top` above 1000 fails.
    pub fn classify_top(&self, scores: &[f32], top: usize) -> PostRankResult<Vec<RankedCategory>> {
        let _span = trace_span!("classify", len = scores.len(), top = top).entered();
        rank_scores(scores, &self.labels, top)
    }

    /// Ranks independent score vectors, one result per vector.
    pub fn classify_batch(&self, batch: &[&[f32]]) -> Vec<PostRankResult<Vec<RankedCategory>>> {
        #[cfg(feature = "rayon")]
        {
            batch.par_iter().map(|scores| self.classify(scores)).collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            batch.iter().map(|scores| self.classify(scores)).collect()
        }
    }
}
