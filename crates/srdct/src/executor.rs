//! Fan-out over the shared worker pool
//!
//! One rayon pool is built lazily for the whole process and reused by every
//! transform instance. A pass hands it one assignment per worker and blocks
//! until all of them have finished; failed or panicking tasks are collected
//! and reported together once the pass is over.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use lazy_static::lazy_static;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use srdct_core::consts::WORKER_THREAD_PREFIX;
use srdct_core::{DctError, DctResult};
use tracing::{debug, warn};

lazy_static! {
    static ref WORKER_POOL: Result<ThreadPool, String> = build_pool();
}

fn build_pool() -> Result<ThreadPool, String> {
    let pool = ThreadPoolBuilder::new()
        .thread_name(|index| format!("{WORKER_THREAD_PREFIX}-{index}"))
        .build()
        .map_err(|err| err.to_string())?;
    debug!(threads = pool.current_num_threads(), "built DCT worker pool");
    Ok(pool)
}

fn worker_pool() -> DctResult<&'static ThreadPool> {
    WORKER_POOL
        .as_ref()
        .map_err(|message| DctError::ThreadPool(message.clone()))
}

/// Runs one task per worker assignment on the shared pool
pub struct ParallelExecutor;

impl ParallelExecutor {
    /// Number of threads in the shared pool
    pub fn pool_threads() -> DctResult<usize> {
        Ok(worker_pool()?.current_num_threads())
    }

    /// Run `task(index, assignment)` for every assignment and wait for all of them.
    ///
    /// Every task runs to completion even if others fail. Errors and panics
    /// are folded into one [`DctError::WorkerFailure`] naming the lowest
    /// failing task index.
    pub fn fan_out<A, F>(assignments: Vec<A>, task: F) -> DctResult<()>
    where
        A: Send,
        F: Fn(usize, A) -> DctResult<()> + Sync,
    {
        let total = assignments.len();
        let pool = worker_pool()?;

        let outcomes: Vec<Result<(), String>> = pool.install(|| {
            assignments
                .into_par_iter()
                .enumerate()
                .map(|(index, assignment)| {
                    match panic::catch_unwind(AssertUnwindSafe(|| task(index, assignment))) {
                        Ok(Ok(())) => Ok(()),
                        Ok(Err(err)) => Err(err.to_string()),
                        Err(payload) => Err(panic_message(payload.as_ref())),
                    }
                })
                .collect()
        });

        let mut failures = outcomes
            .into_iter()
            .enumerate()
            .filter_map(|(index, outcome)| outcome.err().map(|message| (index, message)));

        let Some((first, message)) = failures.next() else {
            return Ok(());
        };
        let failed = 1 + failures.count();
        warn!(failed, total, task = first, %message, "worker tasks failed");

        Err(DctError::WorkerFailure {
            failed,
            total,
            task: first,
            message,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "worker panicked".to_string()
    }
}
