//! # srdct - split-radix 2D DCT
//!
//! In-place forward (DCT-II) and inverse (DCT-III) cosine transforms of
//! real matrices whose row and column counts are powers of two.
//!
//! ## Quick Start
//!
//! ```
//! use srdct::Dct2d;
//!
//! let mut dct = Dct2d::<f32>::new(8, 8).unwrap();
//! let mut block = vec![1.0f32; 64];
//!
//! dct.forward(&mut block, true).unwrap();
//! assert!((block[0] - 8.0).abs() < 1e-4);
//!
//! dct.inverse(&mut block, true).unwrap();
//! assert!(block.iter().all(|x| (x - 1.0).abs() < 1e-4));
//! ```
//!
//! Nested rows work the same way:
//!
//! ```
//! use srdct::{Dct2d, DctOptions};
//!
//! let options = DctOptions::new().threads(4).parallel_threshold(0);
//! let mut dct = Dct2d::<f64>::with_options(2, 2, options).unwrap();
//! let mut block = vec![vec![1.0, 1.0], vec![1.0, 1.0]];
//!
//! dct.forward(&mut block, false).unwrap();
//! assert!((block[0][0] - 4.0).abs() < 1e-12);
//! ```
//!
//! ## Execution
//!
//! Matrices with at least the configured `parallel_threshold` elements are
//! split across a process-wide worker pool; smaller ones run on the calling
//! thread. Both paths produce the same result up to rounding.

mod columns;

pub mod dct2d;
pub mod executor;
pub mod matrix;
pub mod options;

pub use dct2d::Dct2d;
pub use executor::ParallelExecutor;
pub use matrix::DctMatrix;
pub use options::DctOptions;

pub use srdct_core::{DctError, DctFloat, DctResult, Dimensions, Direction};
pub use srdct_transform::{reference, Dct1d, TrigTables};
