//! Deterministic traversal of a scene subtree.
use super::tree::SceneTree;
use trellis_types::NodeId;

/// One step of a depth-first walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Before the node's children.
    Enter(NodeId),
    /// After the node's children.
    Exit(NodeId),
}

/// Walks a subtree without recursion, yielding enter and exit events.
///
/// Children are visited in host order. The walker borrows the tree, so callers
/// that mutate nodes collect the events first.
pub struct Walker<'a, T> {
    tree: &'a SceneTree<T>,
    stack: Vec<Visit>,
}

impl<'a, T> Walker<'a, T> {
    pub(crate) fn new(tree: &'a SceneTree<T>, start: NodeId) -> Self {
        let stack = if tree.contains(start) {
            vec![Visit::Enter(start)]
        } else {
            Vec::new()
        };
        Self { tree, stack }
    }
}

impl<T> Iterator for Walker<'_, T> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        let visit = self.stack.pop()?;
        if let Visit::Enter(id) = visit {
            self.stack.push(Visit::Exit(id));
            for child in self.tree.children(id).iter().rev() {
                self.stack.push(Visit::Enter(*child));
            }
        }
        Some(visit)
    }
}

impl<T> SceneTree<T> {
    /// Enter and exit events for the subtree at `start`.
    pub fn walk(&self, start: NodeId) -> Walker<'_, T> {
        Walker::new(self, start)
    }

    /// The subtree at `start` in pre-order, `start` first.
    pub fn descendants(&self, start: NodeId) -> Vec<NodeId> {
        self.walk(start)
            .filter_map(|visit| match visit {
                Visit::Enter(id) => Some(id),
                Visit::Exit(_) => None,
            })
            .collect()
    }
}
