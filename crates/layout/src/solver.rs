use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::convert::flex_style_to_taffy;
use log::{debug, trace};
use taffy::prelude::{AvailableSpace, Size, TaffyTree};
use trellis_style::StyleNode;
use trellis_traits::LayoutResults;
use trellis_types::LayoutBox;

/// Computes flexbox layout for a style snapshot with taffy.
///
/// Every call builds a fresh taffy tree: snapshots are rebuilt from scratch on
/// each pass, so there is nothing to diff against.
#[derive(Debug, Clone, Default)]
pub struct FlexSolver {
    config: LayoutConfig,
}

impl FlexSolver {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Lays out the snapshot and returns one box per node.
    ///
    /// Box origins are relative to the parent's border box; the root's origin
    /// is its own margin offset.
    pub fn compute(&self, tree: &StyleNode) -> Result<LayoutResults, LayoutError> {
        let mut taffy: TaffyTree<()> = TaffyTree::new();
        if !self.config.round_to_pixels {
            taffy.disable_rounding();
        }

        // Pre-order build; each node is attached to its parent as it is created,
        // which preserves child order.
        let mut mapping = Vec::with_capacity(tree.node_count());
        let mut stack = vec![(tree, None)];
        while let Some((node, parent)) = stack.pop() {
            let id = taffy.new_leaf(flex_style_to_taffy(&node.style))?;
            if let Some(parent) = parent {
                taffy.add_child(parent, id)?;
            }
            mapping.push((node.key, id));
            for child in node.children.iter().rev() {
                stack.push((child, Some(id)));
            }
        }

        let root = mapping[0].1;
        taffy.compute_layout(root, self.available_space())?;

        let mut results = LayoutResults::with_capacity(mapping.len());
        for (key, id) in mapping {
            let layout = taffy.layout(id)?;
            let solved = LayoutBox::new(
                layout.location.x,
                layout.location.y,
                layout.size.width,
                layout.size.height,
            );
            trace!("{} -> {:?}", key, solved);
            results.insert(key, solved);
        }
        debug!("Solved {} nodes under {}", results.len(), tree.key);
        Ok(results)
    }

    fn available_space(&self) -> Size<AvailableSpace> {
        let axis = |value: Option<f32>| value.map_or(AvailableSpace::MaxContent, AvailableSpace::Definite);
        Size {
            width: axis(self.config.available_width),
            height: axis(self.config.available_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use trellis_style::{BoxSides, Dimension, FlexDirection, FlexStyle};
    use trellis_types::NodeId;

    fn node(index: u32, style: FlexStyle, children: Vec<StyleNode>) -> StyleNode {
        StyleNode {
            key: NodeId::new(index, 0),
            style: Arc::new(style),
            children,
        }
    }

    fn sized(width: f32, height: f32) -> FlexStyle {
        FlexStyle {
            width: Dimension::Points(width),
            height: Dimension::Points(height),
            ..Default::default()
        }
    }

    #[test]
    fn test_row_children_offset_by_padding() {
        let root_style = FlexStyle {
            flex_direction: FlexDirection::Row,
            padding: BoxSides::uniform(10.0),
            ..sized(200.0, 100.0)
        };
        let tree = node(
            0,
            root_style,
            vec![node(1, sized(50.0, 20.0), vec![]), node(2, sized(30.0, 20.0), vec![])],
        );

        let results = FlexSolver::default().compute(&tree).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(results[&NodeId::new(0, 0)], LayoutBox::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(results[&NodeId::new(1, 0)], LayoutBox::new(10.0, 10.0, 50.0, 20.0));
        assert_eq!(results[&NodeId::new(2, 0)], LayoutBox::new(60.0, 10.0, 30.0, 20.0));
    }

    #[test]
    fn test_column_auto_height_wraps_children() {
        let root_style = FlexStyle {
            width: Dimension::Points(100.0),
            border_width: BoxSides::uniform(5.0),
            ..Default::default()
        };
        let tree = node(
            0,
            root_style,
            vec![node(1, sized(40.0, 25.0), vec![]), node(2, sized(40.0, 35.0), vec![])],
        );

        let results = FlexSolver::default().compute(&tree).unwrap();
        let root = results[&NodeId::new(0, 0)];
        assert_eq!(root.height, 70.0);
        assert_eq!(results[&NodeId::new(2, 0)].top, 30.0);
    }

    #[test]
    fn test_percent_width_resolves_against_parent() {
        let root_style = FlexStyle {
            flex_direction: FlexDirection::Row,
            ..sized(200.0, 100.0)
        };
        let child_style = FlexStyle {
            width: Dimension::Percent(50.0),
            height: Dimension::Points(10.0),
            ..Default::default()
        };
        let tree = node(0, root_style, vec![node(1, child_style, vec![])]);
        let results = FlexSolver::default().compute(&tree).unwrap();
        assert_eq!(results[&NodeId::new(1, 0)].width, 100.0);
    }
}
