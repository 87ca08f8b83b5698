//! Per-instance execution options

use std::num::NonZeroUsize;

use srdct_core::consts;
use srdct_core::{DctError, DctResult};

/// Worker count and parallel threshold of a [`crate::Dct2d`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DctOptions {
    /// Number of workers each pass is split across
    pub threads: usize,
    /// Smallest `rows * cols` that runs on the worker pool
    pub parallel_threshold: usize,
}

impl Default for DctOptions {
    fn default() -> Self {
        Self {
            threads: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
            parallel_threshold: consts::DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl DctOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Worker count; 1 forces the sequential path
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Matrix size from which transforms fan out; 0 parallelizes everything
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Whether a `rows x cols` transform runs on the worker pool
    pub fn is_parallel(&self, rows: usize, cols: usize) -> bool {
        self.threads > 1 && rows * cols >= self.parallel_threshold
    }

    pub(crate) fn validate(&self) -> DctResult<()> {
        if self.threads == 0 {
            return Err(DctError::InvalidParameter(
                "thread count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
