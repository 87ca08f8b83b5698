//! Error types for DCT operations

use thiserror::Error;

/// Result type for DCT operations
pub type DctResult<T> = Result<T, DctError>;

/// Errors that can occur while configuring or running a transform
#[derive(Error, Debug)]
pub enum DctError {
    #[error("Invalid dimensions: {rows}x{cols} (both must be powers of two)")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Shape mismatch: expected {expected_rows}x{expected_cols}, got {actual}")]
    ShapeMismatch {
        expected_rows: usize,
        expected_cols: usize,
        actual: String,
    },

    #[error("{failed} of {total} worker tasks failed, first failure in task {task}: {message}")]
    WorkerFailure {
        failed: usize,
        total: usize,
        task: usize,
        message: String,
    },

    #[error("Thread pool unavailable: {0}")]
    ThreadPool(String),

    #[error("Out of memory")]
    OutOfMemory,

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl From<std::collections::TryReserveError> for DctError {
    fn from(_: std::collections::TryReserveError) -> Self {
        DctError::OutOfMemory
    }
}
