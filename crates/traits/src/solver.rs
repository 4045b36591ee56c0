//! The layout solver seam.
//!
//! A solve is a message round-trip. The core sends a [`SolveRequest`] together
//! with a [`SolveReply`] handle; the solver answers through the handle from any
//! thread, at any later time. The core drains answers from a completion
//! channel, so the solver never touches the live tree.

use log::debug;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use trellis_style::StyleNode;
use trellis_types::{LayoutBox, NodeId};

/// Flat solver output: one box per laid-out node.
pub type LayoutResults = HashMap<NodeId, LayoutBox>;

pub type SolveOutcome = Result<LayoutResults, SolveError>;

pub type CompletionSender = async_channel::Sender<SolveCompletion>;
pub type CompletionReceiver = async_channel::Receiver<SolveCompletion>;

/// Creates the channel solve answers travel back on.
pub fn completion_channel() -> (CompletionSender, CompletionReceiver) {
    async_channel::unbounded()
}

/// Errors a solver can report.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Layout solver failed: {0}")]
    Failed(String),

    #[error("Layout solver dropped the request without answering")]
    Abandoned,
}

/// Identifies one dispatched solve. Monotonic per scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// The snapshot of one root's layout subtree.
#[derive(Debug, Clone)]
pub struct SolveRequest {
    pub id: RequestId,
    pub tree: StyleNode,
}

impl SolveRequest {
    pub fn root(&self) -> NodeId {
        self.tree.key
    }
}

/// A finished solve, as it arrives on the completion channel.
#[derive(Debug)]
pub struct SolveCompletion {
    pub root: NodeId,
    pub request: RequestId,
    pub outcome: SolveOutcome,
}

/// One-shot answer handle for a dispatched request.
///
/// Dropping the handle without calling [`SolveReply::complete`] answers with
/// [`SolveError::Abandoned`], so a waiting scene is never left hanging.
#[derive(Debug)]
pub struct SolveReply {
    sender: Option<CompletionSender>,
    root: NodeId,
    request: RequestId,
}

impl SolveReply {
    pub fn new(sender: CompletionSender, root: NodeId, request: RequestId) -> Self {
        Self {
            sender: Some(sender),
            root,
            request,
        }
    }

    /// Sends the outcome back to the scene. Safe to call from any thread.
    pub fn complete(mut self, outcome: SolveOutcome) {
        self.send(outcome);
    }

    fn send(&mut self, outcome: SolveOutcome) {
        let Some(sender) = self.sender.take() else {
            return;
        };
        let completion = SolveCompletion {
            root: self.root,
            request: self.request,
            outcome,
        };
        if sender.try_send(completion).is_err() {
            debug!(
                "Completion for {} ({}) dropped: scene is gone.",
                self.request, self.root
            );
        }
    }
}

impl Drop for SolveReply {
    fn drop(&mut self) {
        if self.sender.is_some() {
            self.send(Err(SolveError::Abandoned));
        }
    }
}

/// Computes layout for a style snapshot.
///
/// Implementations must be side-effect free with respect to the scene and must
/// answer each request at most once (the reply handle enforces this).
pub trait LayoutSolver: Send + Sync {
    fn dispatch(&self, request: SolveRequest, reply: SolveReply);

    /// Returns a human-readable name for this solver (for logging/debugging).
    fn name(&self) -> &'static str {
        "LayoutSolver"
    }
}
