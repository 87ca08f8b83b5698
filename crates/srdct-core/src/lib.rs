//! Core types and utilities for the split-radix DCT
//!
//! This crate provides the pieces shared by the transform kernels and the
//! two-dimensional orchestrator: the error type, the floating point sample
//! trait, transform dimensions and the reusable scratch buffer.

pub mod consts;
pub mod error;
pub mod layout;
pub mod scratch;
pub mod types;

pub use error::{DctError, DctResult};
pub use layout::ColumnShape;
pub use scratch::*;
pub use types::*;
