//! Flexbox layout as a component of scene nodes.
//!
//! A [`FlexNode`] holds a node's style inputs and its computed geometry. The
//! scene tree schedules one debounced solve per layout root, ships an owned
//! snapshot to the solver, and writes the answer back in [`apply`].

mod apply;
mod geometry;
mod node;
mod root;

pub use self::geometry::Geometry;
pub use self::node::FlexNode;
pub use self::root::RootPhase;
