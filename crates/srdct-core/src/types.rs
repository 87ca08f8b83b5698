//! Core types for the DCT

use num_traits::Float;
use std::fmt::Debug;

use crate::{DctError, DctResult};

/// Floating point sample the transforms operate on.
///
/// Tables are computed in double precision and rounded once into the sample
/// type, so `f32` and `f64` share one code path.
pub trait DctFloat: Float + Debug + Default + Send + Sync + 'static {
    fn from_f64(value: f64) -> Self;
}

impl DctFloat for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

impl DctFloat for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

/// Transform direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// DCT-II
    Forward,
    /// DCT-III
    Inverse,
}

/// Matrix dimensions of a 2D transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl Dimensions {
    /// Validates that both extents are powers of two.
    pub fn new(rows: usize, cols: usize) -> DctResult<Self> {
        if !rows.is_power_of_two() || !cols.is_power_of_two() {
            return Err(DctError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn element_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Length of the longest 1D transform either axis needs
    pub fn max_extent(&self) -> usize {
        self.rows.max(self.cols)
    }
}
