//! Strided column access for the column pass

use std::marker::PhantomData;

/// Raw view of a matrix's rows that lets several workers stage disjoint
/// column blocks at the same time.
///
/// The view holds the rows' exclusive borrow for its whole lifetime, so the
/// only accesses to the rows are the ones made through it.
pub(crate) struct ColumnView<'a, T> {
    rows: Vec<*mut T>,
    cols: usize,
    _rows: PhantomData<&'a mut [T]>,
}

// SAFETY: the view is only a set of row pointers. Concurrent `gather` and
// `scatter` calls are sound as long as they touch disjoint columns, which is
// the contract of both methods.
unsafe impl<T: Send + Sync> Send for ColumnView<'_, T> {}
unsafe impl<T: Send + Sync> Sync for ColumnView<'_, T> {}

impl<'a, T: Copy> ColumnView<'a, T> {
    pub(crate) fn new(lines: &'a mut [&mut [T]], cols: usize) -> Self {
        assert!(lines.iter().all(|row| row.len() == cols));
        Self {
            rows: lines.iter_mut().map(|row| row.as_mut_ptr()).collect(),
            cols,
            _rows: PhantomData,
        }
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows.len()
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    /// Copy columns `start..start + width` into `segment`, one column after
    /// another.
    ///
    /// # Safety
    ///
    /// No other thread may write to these columns during the call.
    pub(crate) unsafe fn gather(&self, start: usize, width: usize, segment: &mut [T]) {
        let rows = self.rows.len();
        assert!(start + width <= self.cols);
        assert_eq!(segment.len(), width * rows);

        for (r, &row) in self.rows.iter().enumerate() {
            for c in 0..width {
                // SAFETY: `start + c < cols` and every row pointer covers `cols` elements
                segment[c * rows + r] = unsafe { *row.add(start + c) };
            }
        }
    }

    /// Write `segment` back to columns `start..start + width`.
    ///
    /// # Safety
    ///
    /// No other thread may read or write these columns during the call.
    pub(crate) unsafe fn scatter(&self, start: usize, width: usize, segment: &[T]) {
        let rows = self.rows.len();
        assert!(start + width <= self.cols);
        assert_eq!(segment.len(), width * rows);

        for (r, &row) in self.rows.iter().enumerate() {
            for c in 0..width {
                // SAFETY: as in `gather`
                unsafe { *row.add(start + c) = segment[c * rows + r] };
            }
        }
    }
}
