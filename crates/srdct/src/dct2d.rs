//! Two-dimensional DCT over row-major power-of-two matrices
//!
//! A 2D transform is separable: the column pass stages blocks of columns in
//! scratch and transforms them with the column-length kernel, then the row
//! pass transforms every row in place with the row-length kernel. Large
//! matrices split both passes across the shared worker pool.

use srdct_core::{ColumnShape, DctFloat, DctResult, Dimensions, Direction, ScratchBuffer};
use srdct_transform::{Dct1d, TrigTables};
use tracing::trace;

use crate::columns::ColumnView;
use crate::executor::ParallelExecutor;
use crate::matrix::DctMatrix;
use crate::options::DctOptions;

/// Forward/inverse 2D DCT for one fixed matrix size
///
/// Owns its trigonometric tables and scratch memory; both are built for the
/// configured size and reused by every call, so repeated transforms of the
/// same size do not allocate.
#[derive(Debug)]
pub struct Dct2d<T> {
    dims: Dimensions,
    options: DctOptions,
    tables: TrigTables<T>,
    row_dct: Dct1d<T>,
    col_dct: Dct1d<T>,
    scratch: ScratchBuffer<T>,
}

/// One axis of a single call: the kernel plus how to run it
#[derive(Clone, Copy)]
struct Axis<'a, T> {
    dct: &'a Dct1d<T>,
    tables: &'a TrigTables<T>,
    direction: Direction,
    scale: bool,
}

impl<T: DctFloat> Axis<'_, T> {
    fn run(&self, line: &mut [T]) {
        self.dct.apply(self.direction, self.tables, line, self.scale);
    }
}

impl<T: DctFloat> Dct2d<T> {
    /// Create a transform for `rows x cols` matrices with default options
    pub fn new(rows: usize, cols: usize) -> DctResult<Self> {
        Self::with_options(rows, cols, DctOptions::default())
    }

    pub fn with_options(rows: usize, cols: usize, options: DctOptions) -> DctResult<Self> {
        let dims = Dimensions::new(rows, cols)?;
        options.validate()?;

        let mut tables = TrigTables::new();
        tables.ensure_capacity(dims.max_extent())?;

        Ok(Self {
            dims,
            options,
            tables,
            row_dct: Dct1d::new(cols)?,
            col_dct: Dct1d::new(rows)?,
            scratch: ScratchBuffer::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.dims.rows
    }

    pub fn cols(&self) -> usize {
        self.dims.cols
    }

    pub fn options(&self) -> &DctOptions {
        &self.options
    }

    /// In-place 2D DCT-II; `scale` makes it orthonormal
    pub fn forward<M>(&mut self, data: &mut M, scale: bool) -> DctResult<()>
    where
        M: DctMatrix<T> + ?Sized,
    {
        self.transform(Direction::Forward, data, scale)
    }

    /// In-place 2D DCT-III; with `scale` it inverts a scaled [`Dct2d::forward`]
    pub fn inverse<M>(&mut self, data: &mut M, scale: bool) -> DctResult<()>
    where
        M: DctMatrix<T> + ?Sized,
    {
        self.transform(Direction::Inverse, data, scale)
    }

    fn transform<M>(&mut self, direction: Direction, data: &mut M, scale: bool) -> DctResult<()>
    where
        M: DctMatrix<T> + ?Sized,
    {
        let Dimensions { rows, cols } = self.dims;
        let mut lines = data.rows_mut(rows, cols)?;
        self.tables.ensure_capacity(self.dims.max_extent())?;

        let parallel = self.options.is_parallel(rows, cols);
        let threads = if parallel { self.options.threads } else { 1 };
        let shape = ColumnShape::classify(cols, threads);
        trace!(
            rows,
            cols,
            elements = self.dims.element_count(),
            ?direction,
            scale,
            parallel,
            threads,
            ?shape,
            "running 2D DCT"
        );

        let scratch = self.scratch.ensure(rows, cols, threads)?;
        let columns = Axis {
            dct: &self.col_dct,
            tables: &self.tables,
            direction,
            scale,
        };
        let row_axis = Axis {
            dct: &self.row_dct,
            ..columns
        };

        column_pass(&mut lines, scratch, columns, threads, parallel)?;
        row_pass(lines, row_axis, threads, parallel)
    }
}

fn column_pass<T: DctFloat>(
    lines: &mut [&mut [T]],
    scratch: &mut [T],
    axis: Axis<'_, T>,
    threads: usize,
    parallel: bool,
) -> DctResult<()> {
    let rows = lines.len();
    let cols = lines.first().map_or(0, |row| row.len());
    let shape = ColumnShape::classify(cols, threads);
    let segment_len = shape.scratch_per_worker(rows);
    let view = ColumnView::new(lines, cols);

    if !parallel {
        transform_columns(&view, &mut scratch[..segment_len], 0, shape, threads, axis);
        return Ok(());
    }

    let segments: Vec<&mut [T]> = scratch.chunks_exact_mut(segment_len).collect();
    ParallelExecutor::fan_out(segments, |worker, segment| {
        transform_columns(&view, segment, worker, shape, threads, axis);
        Ok(())
    })
}

fn transform_columns<T: DctFloat>(
    view: &ColumnView<'_, T>,
    segment: &mut [T],
    worker: usize,
    shape: ColumnShape,
    threads: usize,
    axis: Axis<'_, T>,
) {
    let rows = view.rows();
    let width = shape.block_width();

    for start in shape.block_starts(worker, view.cols(), threads) {
        // SAFETY: `block_starts` hands every column block to exactly one worker
        unsafe { view.gather(start, width, segment) };
        for column in segment.chunks_exact_mut(rows) {
            axis.run(column);
        }
        // SAFETY: as above
        unsafe { view.scatter(start, width, segment) };
    }
}

fn row_pass<T: DctFloat>(
    lines: Vec<&mut [T]>,
    axis: Axis<'_, T>,
    threads: usize,
    parallel: bool,
) -> DctResult<()> {
    if !parallel {
        for row in lines {
            axis.run(row);
        }
        return Ok(());
    }

    // Worker k takes rows k, k + W, ...
    let workers = threads.min(lines.len());
    let mut assignments: Vec<Vec<&mut [T]>> = (0..workers).map(|_| Vec::new()).collect();
    for (index, row) in lines.into_iter().enumerate() {
        assignments[index % workers].push(row);
    }

    ParallelExecutor::fan_out(assignments, |_, rows| {
        for row in rows {
            axis.run(row);
        }
        Ok(())
    })
}
