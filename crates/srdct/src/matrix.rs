//! Matrix storage accepted by the 2D transform
//!
//! Both storage layouts are reduced to one list of mutable row slices before
//! any element is touched, so a shape error always leaves the data as it was.

use srdct_core::{DctError, DctResult};

/// Row-major matrix storage the 2D transform can run on
pub trait DctMatrix<T> {
    /// Split the storage into `rows` mutable rows of `cols` elements.
    ///
    /// Fails with [`DctError::ShapeMismatch`] without modifying anything when
    /// the storage does not have exactly that shape.
    fn rows_mut(&mut self, rows: usize, cols: usize) -> DctResult<Vec<&mut [T]>>;
}

impl<T> DctMatrix<T> for [T] {
    fn rows_mut(&mut self, rows: usize, cols: usize) -> DctResult<Vec<&mut [T]>> {
        if self.len() != rows * cols {
            return Err(DctError::ShapeMismatch {
                expected_rows: rows,
                expected_cols: cols,
                actual: format!("flat buffer of {} elements", self.len()),
            });
        }
        Ok(self.chunks_exact_mut(cols).collect())
    }
}

impl<T> DctMatrix<T> for Vec<T> {
    fn rows_mut(&mut self, rows: usize, cols: usize) -> DctResult<Vec<&mut [T]>> {
        self.as_mut_slice().rows_mut(rows, cols)
    }
}

impl<T> DctMatrix<T> for [Vec<T>] {
    fn rows_mut(&mut self, rows: usize, cols: usize) -> DctResult<Vec<&mut [T]>> {
        if self.len() != rows {
            return Err(DctError::ShapeMismatch {
                expected_rows: rows,
                expected_cols: cols,
                actual: format!("{} rows", self.len()),
            });
        }
        if let Some((index, row)) = self.iter().enumerate().find(|(_, row)| row.len() != cols) {
            return Err(DctError::ShapeMismatch {
                expected_rows: rows,
                expected_cols: cols,
                actual: format!("row {index} has {} elements", row.len()),
            });
        }
        Ok(self.iter_mut().map(Vec::as_mut_slice).collect())
    }
}

impl<T> DctMatrix<T> for Vec<Vec<T>> {
    fn rows_mut(&mut self, rows: usize, cols: usize) -> DctResult<Vec<&mut [T]>> {
        self.as_mut_slice().rows_mut(rows, cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_rows() {
        let mut data: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let rows = data.rows_mut(2, 4).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[4.0, 5.0, 6.0, 7.0]);
    }

    #[test]
    fn test_flat_length_mismatch() {
        let mut data = vec![0.0f64; 12];
        let err = data.rows_mut(4, 4).unwrap_err();
        assert!(matches!(
            err,
            DctError::ShapeMismatch {
                expected_rows: 4,
                expected_cols: 4,
                ..
            }
        ));
        assert!(err.to_string().contains("12 elements"));
    }

    #[test]
    fn test_nested_rows() {
        let mut data = vec![vec![1.0f32, 2.0], vec![3.0, 4.0]];
        let rows = DctMatrix::<f32>::rows_mut(&mut data, 2, 2).unwrap();
        assert_eq!(rows[0], &[1.0, 2.0]);
        assert_eq!(rows[1], &[3.0, 4.0]);
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let mut data = vec![vec![0.0f32; 4], vec![0.0; 3], vec![0.0; 4], vec![0.0; 4]];
        let err = DctMatrix::<f32>::rows_mut(&mut data, 4, 4).unwrap_err();
        assert!(err.to_string().contains("row 1 has 3 elements"));

        let mut short = vec![vec![0.0f32; 4]; 2];
        assert!(DctMatrix::<f32>::rows_mut(&mut short, 4, 4).is_err());
    }
}
