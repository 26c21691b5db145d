//! Error types for square construction and shape operations.

use thiserror::Error;

/// Failure modes surfaced by square construction and shape operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuadError {
    #[error("a square needs at least 4 points, got {0}")]
    TooFewPoints(usize),

    #[error("point ordering is invalid and will not form a square")]
    InvalidOrdering,

    #[error("vertex index {0} is out of range (expected 0..=3)")]
    IndexOutOfRange(usize),

    #[error("{0} is not implemented")]
    Unimplemented(&'static str),
}

/// Result type for square operations.
pub type Result<T> = std::result::Result<T, QuadError>;
