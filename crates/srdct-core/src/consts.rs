//! Constants used throughout the DCT implementation

/// Matrix size (`rows * cols`) from which a 2D transform fans out to the worker pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 65536;

/// Widest group of columns a single worker gathers into scratch at once
pub const COLUMN_BLOCK: usize = 4;

/// Prefix of the worker pool thread names
pub const WORKER_THREAD_PREFIX: &str = "srdct-worker";
