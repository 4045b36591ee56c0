pub mod executor;
pub mod solver;

pub use executor::{Executor, SyncExecutor};
pub use solver::{
    CompletionReceiver, CompletionSender, LayoutResults, LayoutSolver, RequestId, SolveCompletion,
    SolveError, SolveOutcome, SolveReply, SolveRequest, completion_channel,
};
