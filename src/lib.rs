//! Trellis: a retained scene tree whose nodes can opt into flexbox layout.
//!
//! Layout is solved away from the update path by a [`LayoutSolver`] and the
//! answers are written back to the live tree on a later tick.

pub mod config;
pub mod error;
pub mod flex;
mod frame;
pub mod scene;

pub use config::{SceneConfig, SolverMode};
pub use error::{SceneError, TrellisError};
pub use flex::{FlexNode, Geometry, RootPhase};
pub use frame::FrameReport;
pub use scene::description::{LayoutReport, NodeDescription, NodeReport, SceneDescription, StyleInput};
pub use scene::{SceneNode, SceneTree, Signal, SignalFlow, SignalKind, Visit};

// Re-export the building blocks so dependents need a single crate.
pub use trellis_layout::{FlexSolver, InlineSolver, LayoutConfig, LayoutError, WorkerSolver};
pub use trellis_style::{
    AlignContent, AlignItems, AlignSelf, BoxSides, Dimension, FlexDirection, FlexStyle, FlexWrap, JustifyContent,
    Overflow, PositionType, SidesInput, StyleNode,
};
pub use trellis_traits::{LayoutResults, LayoutSolver, RequestId, SolveError, SolveOutcome, SolveReply, SolveRequest};
pub use trellis_types::{ClipRect, LayoutBox, NodeId};
