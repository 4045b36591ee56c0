//! `LayoutSolver` front-ends for [`FlexSolver`].
use crate::config::LayoutConfig;
use crate::solver::FlexSolver;
use log::{debug, warn};
use std::sync::Arc;
use trellis_executor::{Executor, ExecutorImpl};
use trellis_traits::{LayoutSolver, SolveError, SolveReply, SolveRequest};

fn solve(solver: &FlexSolver, request: SolveRequest, reply: SolveReply) {
    let outcome = solver.compute(&request.tree).map_err(|e| {
        warn!("Layout for {} ({}) failed: {}", request.root(), request.id, e);
        SolveError::from(e)
    });
    reply.complete(outcome);
}

/// Solves on the calling thread before `dispatch` returns.
///
/// The answer still travels through the completion channel, so the scene
/// sees it on its next tick like any other.
#[derive(Debug, Clone, Default)]
pub struct InlineSolver {
    solver: FlexSolver,
}

impl InlineSolver {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            solver: FlexSolver::new(config),
        }
    }
}

impl LayoutSolver for InlineSolver {
    fn dispatch(&self, request: SolveRequest, reply: SolveReply) {
        solve(&self.solver, request, reply);
    }

    fn name(&self) -> &'static str {
        "InlineSolver"
    }
}

/// Solves on an executor's threads.
#[derive(Debug, Clone)]
pub struct WorkerSolver {
    solver: Arc<FlexSolver>,
    executor: ExecutorImpl,
}

impl WorkerSolver {
    pub fn new(config: LayoutConfig, executor: ExecutorImpl) -> Self {
        debug!(
            "Layout worker on {} ({} threads)",
            executor.name(),
            executor.parallelism()
        );
        Self {
            solver: Arc::new(FlexSolver::new(config)),
            executor,
        }
    }

    /// A worker on the default executor.
    pub fn with_default_executor(config: LayoutConfig) -> Self {
        Self::new(config, ExecutorImpl::default())
    }
}

impl LayoutSolver for WorkerSolver {
    fn dispatch(&self, request: SolveRequest, reply: SolveReply) {
        let solver = Arc::clone(&self.solver);
        self.executor.spawn(move || solve(&solver, request, reply));
    }

    fn name(&self) -> &'static str {
        "WorkerSolver"
    }
}
