//! One-dimensional transform kernels for the split-radix DCT
//!
//! This crate implements the shared trigonometric tables, the split-radix
//! complex FFT built on them, the 1-D DCT-II/DCT-III and a direct reference
//! DCT used to check the fast path.

mod fft;

pub mod dct1d;
pub mod reference;
pub mod tables;

pub use dct1d::*;
pub use reference::*;
pub use tables::*;

pub use srdct_core::{DctError, DctFloat, DctResult, Direction};
