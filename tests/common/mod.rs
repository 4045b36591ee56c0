#![allow(dead_code)]

pub mod fixtures;

use std::sync::{Arc, Mutex};
use trellis::{
    FlexSolver, LayoutBox, LayoutConfig, LayoutResults, LayoutSolver, NodeId, SceneTree, SolveError, SolveReply,
    SolveRequest,
};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A solver that keeps every request until the test decides what to do with it.
#[derive(Default)]
pub struct ManualSolver {
    pending: Mutex<Vec<(SolveRequest, SolveReply)>>,
    dispatched: Mutex<usize>,
}

impl ManualSolver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Requests received and not yet answered.
    pub fn pending(&self) -> usize {
        self.pending.lock().map(|p| p.len()).unwrap_or(0)
    }

    /// Requests received over the solver's lifetime.
    pub fn dispatched(&self) -> usize {
        self.dispatched.lock().map(|d| *d).unwrap_or(0)
    }

    /// Removes and returns every held request, oldest first.
    pub fn take(&self) -> Vec<(SolveRequest, SolveReply)> {
        self.pending.lock().map(|mut p| std::mem::take(&mut *p)).unwrap_or_default()
    }

    /// Removes the only held request. Panics if there is not exactly one.
    pub fn take_one(&self) -> (SolveRequest, SolveReply) {
        let mut taken = self.take();
        assert_eq!(taken.len(), 1, "expected exactly one held request");
        taken.remove(0)
    }

    /// Answers every held request with a real taffy solve.
    pub fn solve_all(&self) {
        let solver = FlexSolver::new(LayoutConfig::default());
        for (request, reply) in self.take() {
            let outcome = solver.compute(&request.tree).map_err(SolveError::from);
            reply.complete(outcome);
        }
    }

    /// Answers every held request with the given boxes.
    pub fn answer_all(&self, boxes: &[(NodeId, LayoutBox)]) {
        for (_, reply) in self.take() {
            reply.complete(Ok(results(boxes)));
        }
    }
}

impl LayoutSolver for ManualSolver {
    fn dispatch(&self, request: SolveRequest, reply: SolveReply) {
        if let Ok(mut count) = self.dispatched.lock() {
            *count += 1;
        }
        if let Ok(mut pending) = self.pending.lock() {
            pending.push((request, reply));
        }
    }

    fn name(&self) -> &'static str {
        "ManualSolver"
    }
}

pub fn results(boxes: &[(NodeId, LayoutBox)]) -> LayoutResults {
    boxes.iter().copied().collect()
}

/// A tree wired to a fresh [`ManualSolver`].
pub fn manual_tree<T>() -> (SceneTree<T>, Arc<ManualSolver>) {
    let solver = ManualSolver::new();
    let tree = SceneTree::new(solver.clone());
    (tree, solver)
}

/// Keys of a request's snapshot in pre-order.
pub fn snapshot_keys(request: &SolveRequest) -> Vec<NodeId> {
    let mut keys = Vec::new();
    let mut stack = vec![&request.tree];
    while let Some(node) = stack.pop() {
        keys.push(node.key);
        stack.extend(node.children.iter().rev());
    }
    keys
}

#[macro_export]
macro_rules! assert_box_eq {
    ($actual:expr, ($left:expr, $top:expr, $width:expr, $height:expr)) => {
        let actual: trellis::LayoutBox = $actual;
        assert_eq!(
            actual,
            trellis::LayoutBox::new($left, $top, $width, $height),
            "box mismatch: got {:?}",
            actual
        );
    };
}
