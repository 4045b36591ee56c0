//! Per-root solve scheduling.
//!
//! A root is `Idle`, `Scheduled` (a deferred task is queued) or `Solving` (a
//! request is out). Dirty events while `Scheduled` are absorbed by the queued
//! task. A task that fires while `Solving` does nothing and leaves the root
//! dirty; the update pass that follows the answer schedules the next solve.

use crate::frame::FrameReport;
use crate::scene::{SceneNode, SceneTree};
use log::{debug, trace, warn};
use trellis_executor::TaskHandle;
use trellis_style::StyleNode;
use trellis_traits::{RequestId, SolveReply, SolveRequest};
use trellis_types::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootPhase {
    Idle,
    Scheduled,
    Solving,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RootState {
    pub(crate) pending: Option<TaskHandle>,
    pub(crate) active: Option<RequestId>,
}

impl RootState {
    pub(crate) fn phase(&self) -> RootPhase {
        if self.active.is_some() {
            RootPhase::Solving
        } else if self.pending.is_some() {
            RootPhase::Scheduled
        } else {
            RootPhase::Idle
        }
    }
}

impl<T: SceneNode> SceneTree<T> {
    /// Queues a solve for `root` unless one is already queued.
    pub(crate) fn schedule_root(&mut self, root: NodeId) {
        let Some(state) = self
            .nodes
            .get_mut(root)
            .and_then(|e| e.flex.as_mut())
            .and_then(|f| f.root.as_mut())
        else {
            return;
        };
        if state.pending.is_some() {
            trace!("Root {} already scheduled", root);
            return;
        }
        let handle = self.tasks.schedule(root);
        state.pending = Some(handle);
        debug!("Root {} scheduled ({})", root, handle);
    }

    /// Runs a deferred root task.
    pub(crate) fn run_root_task(&mut self, root: NodeId, handle: TaskHandle, report: &mut FrameReport) {
        let Some(flex) = self.nodes.get_mut(root).and_then(|e| e.flex.as_mut()) else {
            trace!("Task {} outlived root {}", handle, root);
            return;
        };
        let Some(state) = flex.root.as_mut() else {
            return;
        };
        if state.pending == Some(handle) {
            state.pending = None;
        }
        if let Some(active) = state.active {
            debug!("Root {} still solving {}; deferring", root, active);
            return;
        }

        self.rebuild_records(root);
        let snapshot = StyleNode::assemble(root, |key| {
            self.nodes.get(key).and_then(|e| e.flex.as_ref()).map(|f| &f.record)
        });
        let (Some(tree), Some(flex)) = (snapshot, self.nodes.get_mut(root).and_then(|e| e.flex.as_mut())) else {
            warn!("Root {} vanished while building its snapshot", root);
            return;
        };

        let request = self.next_request;
        self.next_request = request.next();
        flex.needs_layout = false;
        if let Some(state) = flex.root.as_mut() {
            state.active = Some(request);
        }

        debug!(
            "Dispatching {} for root {} ({} nodes) to {}",
            request,
            root,
            tree.node_count(),
            self.solver.name()
        );
        let reply = SolveReply::new(self.completion_tx.clone(), root, request);
        self.in_flight += 1;
        report.dispatched += 1;
        self.solver.dispatch(SolveRequest { id: request, tree }, reply);
    }

    /// Refills every record's child list from the host tree, in host order.
    fn rebuild_records(&mut self, root: NodeId) {
        for id in self.descendants(root) {
            let Some(flex) = self.flex_mut(id) else {
                continue;
            };
            flex.record.clear_children();
            let parent = flex.parent_flex();
            if let Some(parent) = parent.and_then(|p| self.flex_mut(p)) {
                parent.record.push_child(id);
            }
        }
    }
}
