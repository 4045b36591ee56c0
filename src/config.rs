use crate::error::TrellisError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use trellis_executor::ExecutorImpl;
use trellis_layout::{InlineSolver, LayoutConfig, LayoutError, WorkerSolver};
use trellis_traits::LayoutSolver;

/// Where layout solves run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverMode {
    /// On the update thread, inside the tick that dispatches the request.
    Inline,
    /// On the executor's thread pool.
    #[default]
    Worker,
}

/// Configuration for a [`SceneTree`](crate::SceneTree).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneConfig {
    pub layout: LayoutConfig,
    pub solver: SolverMode,

    /// Relative tolerance under which a child's extent snaps to its parent's
    /// client extent. Absorbs float noise that would otherwise make an exactly
    /// filled container scrollable.
    ///
    /// Defaults to `1e-4`.
    pub scroll_snap_tolerance: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            solver: SolverMode::default(),
            scroll_snap_tolerance: 1e-4,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, TrellisError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds the solver this configuration asks for.
    pub fn build_solver(&self) -> Result<Arc<dyn LayoutSolver>, TrellisError> {
        let solver: Arc<dyn LayoutSolver> = match self.solver {
            SolverMode::Inline => Arc::new(InlineSolver::new(self.layout)),
            SolverMode::Worker => Arc::new(WorkerSolver::new(self.layout, worker_executor()?)),
        };
        Ok(solver)
    }
}

#[cfg(feature = "rayon-executor")]
fn worker_executor() -> Result<ExecutorImpl, LayoutError> {
    trellis_executor::RayonExecutor::dedicated()
        .map(ExecutorImpl::Rayon)
        .map_err(|e| LayoutError::Pool(e.to_string()))
}

#[cfg(not(feature = "rayon-executor"))]
fn worker_executor() -> Result<ExecutorImpl, LayoutError> {
    Ok(ExecutorImpl::Sync(trellis_executor::SyncExecutor::new()))
}
