//! The host scene tree.
//!
//! Nodes carry an arbitrary payload implementing [`SceneNode`] and may opt
//! into flexbox layout by holding a [`FlexNode`] component.

pub mod description;
mod tree;
mod walker;

pub use self::tree::SceneTree;
pub use self::walker::{Visit, Walker};

use crate::flex::FlexNode;
use std::borrow::Cow;
use trellis_types::NodeId;

/// What a signal is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalKind {
    /// A layout node below has changed and its root must re-solve.
    NeedsLayout,
    /// Application-defined notification.
    Custom(Cow<'static, str>),
}

/// A notification travelling up the parent chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub kind: SignalKind,
    pub source: NodeId,
    pub payload: Option<serde_json::Value>,
}

impl Signal {
    pub fn new(kind: SignalKind, source: NodeId) -> Self {
        Self {
            kind,
            source,
            payload: None,
        }
    }

    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

/// Whether a signal keeps climbing after a node has seen it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalFlow {
    Continue,
    Consumed,
}

/// Hooks a scene payload can implement. All have no-op defaults.
pub trait SceneNode {
    /// Runs once per update pass, after the node's children have been updated.
    fn after_update(&mut self, _flex: Option<&FlexNode>) {}

    /// Runs when a solve result has just been written to this node.
    fn on_layout_applied(&mut self, _flex: &FlexNode) {}

    /// Sees every signal that passes through this node.
    ///
    /// Returning [`SignalFlow::Consumed`] stops a custom signal here. Layout
    /// signals only stop at a layout root.
    fn on_signal(&mut self, _signal: &Signal) -> SignalFlow {
        SignalFlow::Continue
    }

    /// Runs before the node is removed from the tree.
    fn on_destroy(&mut self) {}
}

impl SceneNode for () {}

/// A bare name, for scenes built from descriptions.
impl SceneNode for String {}
