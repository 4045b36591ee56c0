// src/error.rs
use thiserror::Error;
use trellis_layout::LayoutError;
use trellis_traits::SolveError;
use trellis_types::NodeId;

/// Misuse of the scene tree API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Node {0} does not exist (destroyed or never created)")]
    NodeNotFound(NodeId),

    #[error("Node {0} has no flex layout component")]
    NotAFlexNode(NodeId),

    #[error("Node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },

    #[error("Index {index} is out of range for a parent with {len} children")]
    IndexOutOfRange { index: usize, len: usize },
}

/// A comprehensive error type for everything trellis can fail at.
#[derive(Error, Debug)]
pub enum TrellisError {
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Solve failed: {0}")]
    Solve(#[from] SolveError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
