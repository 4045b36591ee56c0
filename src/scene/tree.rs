use super::walker::Visit;
use super::{SceneNode, Signal, SignalFlow, SignalKind};
use crate::config::SceneConfig;
use crate::error::{SceneError, TrellisError};
use crate::flex::FlexNode;
use log::{debug, trace};
use slotmap::SlotMap;
use std::sync::Arc;
use trellis_executor::TaskQueue;
use trellis_traits::{CompletionReceiver, CompletionSender, LayoutSolver, RequestId, completion_channel};
use trellis_types::NodeId;

pub(crate) struct SceneEntry<T> {
    pub(crate) payload: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) flex: Option<FlexNode>,
}

/// A retained tree of scene nodes, some of which take part in flex layout.
///
/// The tree is single-threaded. Layout solves leave it as owned snapshots and
/// come back through a completion channel that [`SceneTree::tick`] drains.
pub struct SceneTree<T> {
    pub(crate) nodes: SlotMap<NodeId, SceneEntry<T>>,
    pub(crate) top_level: Vec<NodeId>,
    pub(crate) config: SceneConfig,
    pub(crate) solver: Arc<dyn LayoutSolver>,
    pub(crate) tasks: TaskQueue<NodeId>,
    pub(crate) completion_tx: CompletionSender,
    pub(crate) completion_rx: CompletionReceiver,
    pub(crate) next_request: RequestId,
    pub(crate) in_flight: usize,
    pub(crate) redraw_requested: bool,
}

impl<T> SceneTree<T> {
    pub fn new(solver: Arc<dyn LayoutSolver>) -> Self {
        Self::with_config(solver, SceneConfig::default())
    }

    pub fn with_config(solver: Arc<dyn LayoutSolver>, config: SceneConfig) -> Self {
        debug!("Scene tree using {}", solver.name());
        let (completion_tx, completion_rx) = completion_channel();
        Self {
            nodes: SlotMap::with_key(),
            top_level: Vec::new(),
            config,
            solver,
            tasks: TaskQueue::new(),
            completion_tx,
            completion_rx,
            next_request: RequestId::new(1),
            in_flight: 0,
            redraw_requested: false,
        }
    }

    /// A tree with the solver the configuration describes.
    pub fn from_config(config: SceneConfig) -> Result<Self, TrellisError> {
        Ok(Self::with_config(config.build_solver()?, config))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Nodes without a parent, in insertion order.
    pub fn top_level(&self) -> &[NodeId] {
        &self.top_level
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.nodes.get(id).map(|e| &e.payload)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.nodes.get_mut(id).map(|e| &mut e.payload)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|e| e.parent)
    }

    /// Children in host order. Empty for unknown ids.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|e| e.children.as_slice()).unwrap_or(&[])
    }

    pub fn flex(&self, id: NodeId) -> Option<&FlexNode> {
        self.nodes.get(id).and_then(|e| e.flex.as_ref())
    }

    pub fn flex_mut(&mut self, id: NodeId) -> Option<&mut FlexNode> {
        self.nodes.get_mut(id).and_then(|e| e.flex.as_mut())
    }

    /// Like [`SceneTree::flex_mut`], but says why it failed.
    pub fn try_flex_mut(&mut self, id: NodeId) -> Result<&mut FlexNode, SceneError> {
        let entry = self.nodes.get_mut(id).ok_or(SceneError::NodeNotFound(id))?;
        entry.flex.as_mut().ok_or(SceneError::NotAFlexNode(id))
    }

    pub fn is_flex_node(&self, id: NodeId) -> bool {
        self.flex(id).is_some()
    }

    /// Nearest layout node strictly above `id`.
    pub fn nearest_flex_ancestor(&self, id: NodeId) -> Option<NodeId> {
        self.parent(id).and_then(|p| self.nearest_flex_inclusive(p))
    }

    fn nearest_flex_inclusive(&self, id: NodeId) -> Option<NodeId> {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let entry = self.nodes.get(current)?;
            if entry.flex.is_some() {
                return Some(current);
            }
            cursor = entry.parent;
        }
        None
    }

    /// Returns and clears the "something moved, draw again" flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// True when no layout task is queued and no solve is outstanding.
    pub fn is_settled(&self) -> bool {
        self.tasks.is_empty() && self.in_flight == 0
    }

    fn attach(&mut self, parent: Option<NodeId>, payload: T) -> Result<NodeId, SceneError> {
        if let Some(parent) = parent {
            if !self.nodes.contains_key(parent) {
                return Err(SceneError::NodeNotFound(parent));
            }
        }
        let id = self.nodes.insert(SceneEntry {
            payload,
            parent,
            children: Vec::new(),
            flex: None,
        });
        match parent.and_then(|p| self.nodes.get_mut(p)) {
            Some(entry) => entry.children.push(id),
            None => self.top_level.push(id),
        }
        Ok(id)
    }

    /// Adds a plain node as the last child of `parent` (or at the top level).
    pub fn insert(&mut self, parent: Option<NodeId>, payload: T) -> Result<NodeId, SceneError> {
        self.attach(parent, payload)
    }

    /// Adds a layout node as the last child of `parent`.
    ///
    /// The nearest layout ancestor becomes its layout parent; with none, the
    /// node is a layout root. Both are fixed for the node's lifetime. The node
    /// starts dirty, so the next update pass asks for a solve.
    pub fn insert_flex(&mut self, parent: Option<NodeId>, payload: T) -> Result<NodeId, SceneError> {
        let layout_parent = parent
            .and_then(|p| self.nearest_flex_inclusive(p))
            .and_then(|p| self.flex(p).map(|f| (p, f.depth())));
        let id = self.attach(parent, payload)?;
        if let Some(entry) = self.nodes.get_mut(id) {
            entry.flex = Some(FlexNode::new(id, layout_parent));
        }
        trace!("Inserted layout node {} under {:?}", id, layout_parent.map(|(p, _)| p));
        Ok(id)
    }

    /// Moves `child` to position `index` among its siblings.
    ///
    /// Nodes never change parent, which keeps every layout link valid. A move
    /// that affects layout marks the nearest layout node dirty.
    pub fn reorder_child(&mut self, parent: NodeId, child: NodeId, index: usize) -> Result<(), SceneError> {
        let entry = self.nodes.get_mut(parent).ok_or(SceneError::NodeNotFound(parent))?;
        let from = entry
            .children
            .iter()
            .position(|c| *c == child)
            .ok_or(SceneError::NotAChild { parent, child })?;
        let len = entry.children.len();
        if index >= len {
            return Err(SceneError::IndexOutOfRange { index, len });
        }
        if from == index {
            return Ok(());
        }
        let moved = entry.children.remove(from);
        entry.children.insert(index, moved);

        let moves_layout = self.descendants(child).iter().any(|n| self.is_flex_node(*n));
        let dirtied = if moves_layout { self.nearest_flex_inclusive(parent) } else { None };
        if let Some(node) = dirtied.and_then(|flex| self.flex_mut(flex)) {
            debug!("Reorder under {} dirties layout node {}", parent, node.key());
            node.needs_layout = true;
        }
        Ok(())
    }
}

impl<T: SceneNode> SceneTree<T> {
    /// Sends a signal up the parent chain, starting at the source's parent.
    ///
    /// Returns the node that consumed it, if any. Layout signals are consumed by
    /// the first layout root on the chain, which marks itself dirty and
    /// schedules a solve.
    pub fn signal(&mut self, signal: Signal) -> Option<NodeId> {
        let mut cursor = self.parent(signal.source);
        while let Some(id) = cursor {
            let entry = self.nodes.get_mut(id)?;
            let next = entry.parent;
            let flow = entry.payload.on_signal(&signal);
            match signal.kind {
                SignalKind::NeedsLayout => {
                    if let Some(flex) = entry.flex.as_mut().filter(|f| f.is_layout_root()) {
                        flex.needs_layout = true;
                        trace!("{} consumed layout signal from {}", id, signal.source);
                        self.schedule_root(id);
                        return Some(id);
                    }
                }
                SignalKind::Custom(_) => {
                    if flow == SignalFlow::Consumed {
                        return Some(id);
                    }
                }
            }
            cursor = next;
        }
        None
    }

    /// Removes `id` and its subtree.
    ///
    /// Layout above the removed subtree is told to re-solve. Payloads see
    /// `on_destroy` children first. Pending solves for removed roots are
    /// cancelled; answers already in flight are dropped when they arrive.
    pub fn destroy(&mut self, id: NodeId) -> Result<(), SceneError> {
        if !self.nodes.contains_key(id) {
            return Err(SceneError::NodeNotFound(id));
        }
        let parent = self.parent(id);
        let subtree = self.descendants(id);
        let has_layout = subtree.iter().any(|n| self.is_flex_node(*n));
        if has_layout && self.nearest_flex_ancestor(id).is_some() {
            self.signal(Signal::new(SignalKind::NeedsLayout, id));
        }

        let exits: Vec<NodeId> = self
            .walk(id)
            .filter_map(|visit| match visit {
                Visit::Exit(n) => Some(n),
                Visit::Enter(_) => None,
            })
            .collect();
        for node in exits {
            let Some(mut entry) = self.nodes.remove(node) else {
                continue;
            };
            entry.payload.on_destroy();
            if let Some(handle) = entry.flex.as_ref().and_then(|f| f.root.as_ref()).and_then(|r| r.pending) {
                self.tasks.cancel(handle);
                debug!("Cancelled pending layout for destroyed root {}", node);
            }
        }

        match parent {
            Some(parent) => {
                if let Some(entry) = self.nodes.get_mut(parent) {
                    entry.children.retain(|c| *c != id);
                }
            }
            None => self.top_level.retain(|c| *c != id),
        }
        Ok(())
    }
}
