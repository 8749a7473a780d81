//! Error types for postrank.

use thiserror::Error;

/// Result alias for postrank operations.
pub type PostRankResult<T> = std::result::Result<T, PostRankError>;

/// Errors that can occur while post-processing raw model output.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum PostRankError {
    /// The score buffer, row width or label table do not describe a valid grid.
    #[error("invalid input shape: {reason} (len={len}, row_width={row_width})")]
    InvalidInputShape {
        len: usize,
        row_width: usize,
        reason: &'static str,
    },
    /// A box is inverted or an overlap ratio left [0, 1].
    #[error("geometry invariant violated: {reason} (value={value})")]
    GeometryInvariantViolation { reason: &'static str, value: f32 },
    /// A parameter lies outside its accepted inclusive range.
    #[error("{name} out of range: {value} not in [{min}, {max}]")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// A label file could not be parsed into an ordered label table.
    #[error("invalid labels: {reason}")]
    InvalidLabels { reason: String },
}
