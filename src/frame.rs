//! The per-frame driver: update passes, deferred tasks and solve answers.
use crate::scene::{SceneNode, SceneTree, Signal, SignalKind, Visit};
use log::{debug, trace, warn};
use serde::Serialize;
use std::ops::AddAssign;
use trellis_traits::SolveCompletion;
use trellis_types::NodeId;

/// What one tick did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FrameReport {
    /// Solve requests sent to the solver.
    pub dispatched: usize,
    /// Answers written to the tree.
    pub applied: usize,
    /// Answers dropped because their root died or moved on.
    pub discarded: usize,
    /// Answers that carried a solver error.
    pub failed: usize,
}

impl FrameReport {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl AddAssign for FrameReport {
    fn add_assign(&mut self, other: Self) {
        self.dispatched += other.dispatched;
        self.applied += other.applied;
        self.discarded += other.discarded;
        self.failed += other.failed;
    }
}

impl<T: SceneNode> SceneTree<T> {
    /// Runs an update pass over the subtree at `start`.
    ///
    /// On the way down, laid-out nodes clamp their scroll offsets and recompute
    /// their clip. On the way up, payloads get `after_update`, and dirty layout
    /// nodes hand their dirtiness to their root.
    pub fn update(&mut self, start: NodeId) {
        let visits: Vec<Visit> = self.walk(start).collect();
        for visit in visits {
            match visit {
                Visit::Enter(id) => self.refresh_geometry(id),
                Visit::Exit(id) => self.finish_node(id),
            }
        }
    }

    fn finish_node(&mut self, id: NodeId) {
        let Some(entry) = self.nodes.get_mut(id) else {
            return;
        };
        entry.payload.after_update(entry.flex.as_ref());
        let Some(flex) = entry.flex.as_mut().filter(|f| f.needs_layout) else {
            return;
        };
        if flex.is_layout_root() {
            self.schedule_root(id);
        } else {
            flex.needs_layout = false;
            trace!("{} is dirty; signalling its root", id);
            self.signal(Signal::new(SignalKind::NeedsLayout, id));
        }
    }

    /// Runs due deferred tasks, then applies every answer that has arrived.
    /// Never blocks.
    pub fn tick(&mut self) -> FrameReport {
        let mut report = FrameReport::default();
        for (handle, root) in self.tasks.take_ready() {
            self.run_root_task(root, handle, &mut report);
        }
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.handle_completion(completion, &mut report);
        }
        if !report.is_empty() {
            debug!("Tick: {:?}", report);
        }
        report
    }

    /// One frame: an update pass over every top-level node, then a tick.
    pub fn frame(&mut self) -> FrameReport {
        for id in self.top_level.clone() {
            self.update(id);
        }
        self.tick()
    }

    /// Ticks until nothing is queued and no solve is outstanding, waiting on the
    /// completion channel in between. Works on any async runtime.
    ///
    /// Never returns if the solver keeps a request without answering or
    /// dropping it.
    pub async fn settle(&mut self) -> FrameReport {
        let mut total = FrameReport::default();
        loop {
            total += self.tick();
            if self.is_settled() {
                return total;
            }
            if !self.tasks.is_empty() {
                continue;
            }
            let Ok(completion) = self.completion_rx.recv().await else {
                return total;
            };
            let mut report = FrameReport::default();
            self.handle_completion(completion, &mut report);
            total += report;
        }
    }

    fn handle_completion(&mut self, completion: SolveCompletion, report: &mut FrameReport) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let SolveCompletion {
            root,
            request,
            outcome,
        } = completion;

        let Some(state) = self
            .nodes
            .get_mut(root)
            .and_then(|e| e.flex.as_mut())
            .and_then(|f| f.root.as_mut())
            .filter(|s| s.active == Some(request))
        else {
            debug!("Discarding {} for {}: root gone or superseded", request, root);
            report.discarded += 1;
            return;
        };
        state.active = None;

        match outcome {
            Ok(results) => {
                self.apply_results(root, &results);
                report.applied += 1;
                self.update(root);
                self.redraw_requested = true;
            }
            Err(err) => {
                warn!("Layout for root {} failed ({}): {}", root, request, err);
                report.failed += 1;
                self.update(root);
            }
        }
    }
}
