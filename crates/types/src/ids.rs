//! Scene node identity.
//!
//! Scene nodes live in a [`slotmap::SlotMap`] keyed by [`NodeId`]. Slots are
//! recycled, but every reuse bumps the slot version, so an id never refers to
//! two different nodes over the lifetime of a tree.

use slotmap::{Key, KeyData};
use std::fmt;

slotmap::new_key_type! {
    /// Identity of a node in a scene tree.
    ///
    /// It doubles as the key of the node's style record when talking to a solver.
    pub struct NodeId;
}

impl NodeId {
    /// Builds an id from a raw slot index and version.
    ///
    /// For solvers and snapshots built outside a scene tree. Versions are
    /// always odd for live slots, so an even `version` is rounded up.
    pub fn new(index: u32, version: u32) -> Self {
        KeyData::from_ffi((u64::from(version) << 32) | u64::from(index)).into()
    }

    /// The slot this id points at.
    pub fn index(self) -> u32 {
        (self.data().as_ffi() & 0xffff_ffff) as u32
    }

    /// The slot version when the node was inserted.
    pub fn version(self) -> u32 {
        (self.data().as_ffi() >> 32) as u32
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index(), self.version())
    }
}
