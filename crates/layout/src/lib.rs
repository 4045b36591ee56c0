use thiserror::Error;
use trellis_traits::SolveError;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Taffy rejected the layout tree: {0:?}")]
    Taffy(taffy::TaffyError),
    #[error("Solver worker pool could not be built: {0}")]
    Pool(String),
}

impl From<taffy::TaffyError> for LayoutError {
    fn from(err: taffy::TaffyError) -> Self {
        LayoutError::Taffy(err)
    }
}

impl From<LayoutError> for SolveError {
    fn from(err: LayoutError) -> Self {
        SolveError::Failed(err.to_string())
    }
}

pub mod config;
pub mod convert;
mod dispatch;
mod solver;

pub use self::config::LayoutConfig;
pub use self::dispatch::{InlineSolver, WorkerSolver};
pub use self::solver::FlexSolver;
