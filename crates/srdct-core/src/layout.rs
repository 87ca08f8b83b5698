//! Column pass partitioning
//!
//! The column pass gathers strided columns into scratch before transforming
//! them. How the columns are split between workers depends on how wide the
//! matrix is relative to the worker count `T`, and each case has its own
//! block width so that no two workers ever touch the same column or the
//! same scratch segment.

use crate::consts::COLUMN_BLOCK;

/// Shape class of the column pass for a given worker count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnShape {
    /// `cols > 2T`: blocks of four adjacent columns, worker `k` takes blocks `k, k + W, ...`
    Wide,
    /// `cols == 2T`: worker `k` takes the column pair `2k, 2k + 1`
    Double,
    /// `cols < 2T`: worker `k` takes column `k` alone
    Single,
}

impl ColumnShape {
    pub fn classify(cols: usize, threads: usize) -> Self {
        let threads = threads.max(1);
        if cols > 2 * threads {
            ColumnShape::Wide
        } else if cols == 2 * threads {
            ColumnShape::Double
        } else {
            ColumnShape::Single
        }
    }

    /// Number of adjacent columns a worker gathers at once
    pub fn block_width(self) -> usize {
        match self {
            ColumnShape::Wide => COLUMN_BLOCK,
            ColumnShape::Double => 2,
            ColumnShape::Single => 1,
        }
    }

    /// Number of workers the column pass is split across
    pub fn workers(self, cols: usize, threads: usize) -> usize {
        let threads = threads.max(1);
        match self {
            ColumnShape::Wide => threads.min(cols / COLUMN_BLOCK),
            ColumnShape::Double => threads,
            ColumnShape::Single => cols,
        }
    }

    /// Scratch elements one worker stages: `block_width` columns of `rows` each
    pub fn scratch_per_worker(self, rows: usize) -> usize {
        self.block_width() * rows
    }

    /// Total scratch length for the whole pass
    pub fn scratch_len(self, rows: usize, cols: usize, threads: usize) -> usize {
        self.workers(cols, threads) * self.scratch_per_worker(rows)
    }

    /// First columns of the blocks assigned to `worker`
    pub fn block_starts(
        self,
        worker: usize,
        cols: usize,
        threads: usize,
    ) -> impl Iterator<Item = usize> {
        let width = self.block_width();
        let workers = self.workers(cols, threads);
        (worker..cols / width)
            .step_by(workers.max(1))
            .map(move |block| block * width)
    }
}
