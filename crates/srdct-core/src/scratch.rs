//! Reusable scratch memory for the column pass
//!
//! The column pass stages strided columns contiguously before transforming
//! them. The scratch buffer is sized for the worst case of the current call
//! and kept between calls, so repeated transforms of the same size allocate
//! only once.

use tracing::debug;

use crate::{ColumnShape, DctFloat, DctResult};

/// Scratch buffer owned by a single transform instance
#[derive(Debug, Default)]
pub struct ScratchBuffer<T> {
    buffer: Vec<T>,
    reallocations: usize,
}

impl<T: DctFloat> ScratchBuffer<T> {
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            reallocations: 0,
        }
    }

    /// Scratch length needed to run the column pass of a `rows x cols`
    /// matrix split across `threads` workers
    pub fn required_len(rows: usize, cols: usize, threads: usize) -> usize {
        ColumnShape::classify(cols, threads).scratch_len(rows, cols, threads)
    }

    /// Get a scratch slice of exactly the required length.
    ///
    /// The existing buffer is reused when it is large enough; otherwise it is
    /// replaced by a larger one. The buffer never shrinks.
    pub fn ensure(&mut self, rows: usize, cols: usize, threads: usize) -> DctResult<&mut [T]> {
        let required = Self::required_len(rows, cols, threads);
        if self.buffer.len() < required {
            debug!(
                current = self.buffer.len(),
                required, rows, cols, threads, "growing scratch buffer"
            );
            let mut buffer = Vec::new();
            buffer.try_reserve_exact(required)?;
            buffer.resize(required, T::zero());
            self.buffer = buffer;
            self.reallocations += 1;
        }
        Ok(&mut self.buffer[..required])
    }

    /// Current length of the underlying buffer
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Release the buffer (useful for freeing memory between bursts of work)
    pub fn clear(&mut self) {
        self.buffer = Vec::new();
    }

    /// Get statistics about scratch usage (for debugging/profiling)
    pub fn stats(&self) -> ScratchStats {
        ScratchStats {
            capacity: self.buffer.len(),
            reallocations: self.reallocations,
        }
    }
}

/// Statistics about scratch buffer usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScratchStats {
    pub capacity: usize,
    pub reallocations: usize,
}
