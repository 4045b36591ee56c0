//! Per-node style records and the owned snapshot handed to a solver.
use crate::style::FlexStyle;
use std::sync::Arc;
use trellis_types::NodeId;

/// The style record a layout node keeps between solves.
///
/// The child list is scratch space: it is cleared and refilled on every solve
/// pass, never patched in place.
#[derive(Debug, Clone)]
pub struct StyleRecord {
    key: NodeId,
    style: Arc<FlexStyle>,
    children: Vec<NodeId>,
}

impl StyleRecord {
    pub fn new(key: NodeId) -> Self {
        Self {
            key,
            style: Arc::new(FlexStyle::default()),
            children: Vec::new(),
        }
    }

    pub fn key(&self) -> NodeId {
        self.key
    }

    pub fn style(&self) -> &FlexStyle {
        &self.style
    }

    /// Shared handle to the style, for snapshots. Cheap to clone.
    pub fn style_arc(&self) -> Arc<FlexStyle> {
        Arc::clone(&self.style)
    }

    /// Mutable access to the style, copying it first if a snapshot still holds it.
    pub fn style_mut(&mut self) -> &mut FlexStyle {
        Arc::make_mut(&mut self.style)
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn clear_children(&mut self) {
        self.children.clear();
    }

    pub fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}

/// An owned, thread-safe copy of a record subtree.
#[derive(Debug, Clone)]
pub struct StyleNode {
    pub key: NodeId,
    pub style: Arc<FlexStyle>,
    pub children: Vec<StyleNode>,
}

impl StyleNode {
    /// Builds the snapshot rooted at `root` from the records' child lists.
    ///
    /// Keys that `lookup` cannot resolve are skipped along with their subtrees.
    /// Returns `None` if the root itself is unknown.
    pub fn assemble<'a, F>(root: NodeId, lookup: F) -> Option<StyleNode>
    where
        F: Fn(NodeId) -> Option<&'a StyleRecord>,
    {
        enum Visit<'r> {
            Enter(NodeId),
            Exit(&'r StyleRecord, usize),
        }

        let mut stack = vec![Visit::Enter(root)];
        let mut built: Vec<StyleNode> = Vec::new();

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(key) => {
                    let Some(record) = lookup(key) else {
                        continue;
                    };
                    stack.push(Visit::Exit(record, built.len()));
                    for child in record.children.iter().rev() {
                        stack.push(Visit::Enter(*child));
                    }
                }
                Visit::Exit(record, first_child) => {
                    let children = built.split_off(first_child);
                    built.push(StyleNode {
                        key: record.key,
                        style: record.style_arc(),
                        children,
                    });
                }
            }
        }

        built.pop()
    }

    /// Number of nodes in this snapshot, root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn id(index: u32) -> NodeId {
        NodeId::new(index, 0)
    }

    #[test]
    fn test_assemble_preserves_child_order() {
        let mut records: HashMap<NodeId, StyleRecord> = HashMap::new();
        for i in 0..4 {
            records.insert(id(i), StyleRecord::new(id(i)));
        }
        let root = records.get_mut(&id(0)).unwrap();
        root.push_child(id(2));
        root.push_child(id(1));
        records.get_mut(&id(2)).unwrap().push_child(id(3));

        let tree = StyleNode::assemble(id(0), |k| records.get(&k)).unwrap();
        assert_eq!(tree.key, id(0));
        let keys: Vec<_> = tree.children.iter().map(|c| c.key).collect();
        assert_eq!(keys, vec![id(2), id(1)]);
        assert_eq!(tree.children[0].children[0].key, id(3));
        assert_eq!(tree.node_count(), 4);
    }

    #[test]
    fn test_assemble_skips_unknown_keys() {
        let mut root = StyleRecord::new(id(0));
        root.push_child(id(9));
        root.push_child(id(1));
        let child = StyleRecord::new(id(1));
        let records = [root, child];

        let tree = StyleNode::assemble(id(0), |k| records.iter().find(|r| r.key() == k)).unwrap();
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].key, id(1));
        assert!(StyleNode::assemble(id(7), |k| records.iter().find(|r| r.key() == k)).is_none());
    }

    #[test]
    fn test_style_mut_copies_when_shared() {
        let mut record = StyleRecord::new(id(0));
        let snapshot = record.style_arc();
        record.style_mut().flex_grow = Some(1.0);
        assert_eq!(snapshot.flex_grow, None);
        assert_eq!(record.style().flex_grow, Some(1.0));
    }
}
