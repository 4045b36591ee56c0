//! Rayon-based executor.
//!
//! Jobs run on rayon's global work-stealing pool, or on a dedicated pool when
//! solver work should not compete with other rayon users in the process.

use std::sync::Arc;
use trellis_traits::Executor;

#[derive(Debug, Clone)]
enum Pool {
    Global,
    Dedicated(Arc<rayon::ThreadPool>),
}

/// An executor backed by a rayon thread pool.
///
/// ```ignore
/// let executor = RayonExecutor::new();
/// executor.spawn(|| solve_something());
/// ```
#[derive(Debug, Clone)]
pub struct RayonExecutor {
    pool: Pool,
    /// Cached thread count for reporting via `parallelism()`.
    num_threads: usize,
}

impl RayonExecutor {
    /// Creates an executor on rayon's global thread pool.
    pub fn new() -> Self {
        Self {
            pool: Pool::Global,
            num_threads: rayon::current_num_threads(),
        }
    }

    /// Creates an executor with its own pool of `num_threads` workers.
    pub fn with_threads(num_threads: usize) -> Result<Self, rayon::ThreadPoolBuildError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("trellis-solver-{}", i))
            .build()?;
        Ok(Self {
            num_threads: pool.current_num_threads(),
            pool: Pool::Dedicated(Arc::new(pool)),
        })
    }

    /// A dedicated pool sized to leave one core for the update thread.
    pub fn dedicated() -> Result<Self, rayon::ThreadPoolBuildError> {
        Self::with_threads(num_cpus::get().saturating_sub(1).max(1))
    }
}

impl Default for RayonExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for RayonExecutor {
    fn spawn<F>(&self, job: F)
    where
        F: FnOnce() + Send + 'static,
    {
        match &self.pool {
            Pool::Global => rayon::spawn(job),
            Pool::Dedicated(pool) => pool.spawn(job),
        }
    }

    fn parallelism(&self) -> usize {
        self.num_threads
    }

    fn name(&self) -> &'static str {
        "RayonExecutor"
    }
}
