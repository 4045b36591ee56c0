//! Executor trait for abstracting where solver work runs.
//!
//! The layout core never spawns threads itself. A solver that wants to work
//! off the update path asks an executor to run a job and reports back through
//! its reply handle.

use std::fmt::Debug;

/// Runs fire-and-forget jobs. Whether a job runs inline or on a pool thread
/// is up to the implementation; [`SyncExecutor`] is always available and
/// `trellis-executor` adds a rayon-backed one.
pub trait Executor: Send + Sync + Debug {
    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static;

    /// How many jobs can run at once. 1 when jobs run inline.
    fn parallelism(&self) -> usize;

    /// Shown in logs.
    fn name(&self) -> &'static str;
}

/// A synchronous executor that runs each job before `spawn` returns.
#[derive(Debug, Clone, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        job();
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}
