//! Executors and deferred scheduling for trellis.
//!
//! ## Available Executors
//!
//! - [`RayonExecutor`]: Work-stealing thread pool (feature: `rayon`)
//! - [`SyncExecutor`]: Inline execution (re-exported from trellis-traits)
//!
//! The [`TaskQueue`] is the update thread's deferred task list; the scene uses
//! it to debounce layout requests per root.
//!
//! ## Usage
//!
//! ```ignore
//! use trellis_executor::{ExecutorImpl, RayonExecutor};
//! use trellis_traits::Executor;
//!
//! let executor = ExecutorImpl::Rayon(RayonExecutor::new());
//! executor.spawn(|| println!("on a worker"));
//! ```

mod deferred;
#[cfg(feature = "rayon")]
mod rayon_executor;

pub use deferred::{TaskHandle, TaskQueue};
#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

pub use trellis_traits::{Executor, SyncExecutor};

/// The executor a worker solver is configured with.
///
/// `Executor::spawn` is generic, so solvers hold this enum instead of a
/// `dyn Executor`.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    /// Runs each job on the calling thread.
    Sync(SyncExecutor),

    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl Executor for ExecutorImpl {
    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.spawn(job),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.spawn(job),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            ExecutorImpl::Rayon(RayonExecutor::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            ExecutorImpl::Sync(SyncExecutor::new())
        }
    }
}
