//! Borrowed views over raw model output.
//!
//! `ScoreBuffer` is a read-only 2D view into the flat `f32` slice an inference
//! engine returns. Rows are candidates and columns are the values produced per
//! candidate. The view owns nothing and never mutates the slice.

use crate::util::{PostRankError, PostRankResult};

/// Number of leading box coordinates in each detection row.
pub const BOX_COORDS: usize = 4;

/// Row-major view of `rows x row_width` raw scores.
#[derive(Copy, Clone, Debug)]
pub struct ScoreBuffer<'a> {
    data: &'a [f32],
    row_width: usize,
}

impl<'a> ScoreBuffer<'a> {
    /// Creates a view whose length must be an exact multiple of `row_width`.
    pub fn new(data: &'a [f32], row_width: usize) -> PostRankResult<Self> {
        if row_width == 0 {
            return Err(PostRankError::InvalidInputShape {
                len: data.len(),
                row_width,
                reason: "row width must be positive",
            });
        }
        if data.len() % row_width != 0 {
            return Err(PostRankError::InvalidInputShape {
                len: data.len(),
                row_width,
                reason: "buffer length is not a multiple of the row width",
            });
        }
        Ok(Self { data, row_width })
    }

    /// Creates a single-row view, as produced by a classifier head.
    pub fn single_row(data: &'a [f32]) -> PostRankResult<Self> {
        Self::new(data, data.len())
    }

    /// Creates a detection view and checks that every row carries class scores.
    pub fn detections(data: &'a [f32], row_width: usize) -> PostRankResult<Self> {
        if row_width <= BOX_COORDS {
            return Err(PostRankError::InvalidInputShape {
                len: data.len(),
                row_width,
                reason: "detection rows need box coordinates and at least one class score",
            });
        }
        Self::new(data, row_width)
    }

    /// Number of values per candidate row.
    pub fn row_width(&self) -> usize {
        self.row_width
    }

    /// Number of candidate rows.
    pub fn num_rows(&self) -> usize {
        self.data.len() / self.row_width
    }

    /// Number of class scores per row when the row starts with a box.
    pub fn num_classes(&self) -> usize {
        self.row_width.saturating_sub(BOX_COORDS)
    }

    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }

    /// Returns row `idx` if it exists.
    pub fn row(&self, idx: usize) -> Option<&'a [f32]> {
        let start = idx.checked_mul(self.row_width)?;
        let end = start.checked_add(self.row_width)?;
        self.data.get(start..end)
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> std::slice::ChunksExact<'a, f32> {
        self.data.chunks_exact(self.row_width)
    }
}
