//! The flex layout component a scene node can hold.
use super::geometry::Geometry;
use super::root::{RootPhase, RootState};
use trellis_style::{
    AlignContent, AlignItems, AlignSelf, BoxSides, Dimension, FlexDirection, FlexStyle, FlexWrap,
    JustifyContent, Overflow, PositionType, SidesInput, StyleRecord,
};
use trellis_types::NodeId;

/// Generates a setter that writes one style field.
///
/// Writing the stored value again is a no-op; any other value updates the
/// record and marks the node dirty.
macro_rules! style_setters {
    ($($setter:ident => $field:ident : $ty:ty),* $(,)?) => {
        $(
            pub fn $setter(&mut self, value: $ty) -> &mut Self {
                if self.record.style().$field != value {
                    self.record.style_mut().$field = value;
                    self.needs_layout = true;
                }
                self
            }
        )*
    };
}

/// Same contract for the four-sided shorthands, which are stored expanded.
macro_rules! sides_setters {
    ($($setter:ident => $field:ident),* $(,)?) => {
        $(
            pub fn $setter(&mut self, value: impl Into<SidesInput>) -> &mut Self {
                let expanded = value.into().expand();
                if self.record.style().$field.as_array() != &expanded {
                    self.record.style_mut().$field = BoxSides::from_array(expanded);
                    self.needs_layout = true;
                }
                self
            }
        )*
    };
}

/// Flexbox participation for one scene node.
///
/// Created through [`SceneTree::insert_flex`](crate::SceneTree::insert_flex),
/// which fixes the node's place in the layout hierarchy for its lifetime.
#[derive(Debug, Clone)]
pub struct FlexNode {
    pub(crate) record: StyleRecord,
    depth: u32,
    parent_flex: Option<NodeId>,
    pub(crate) needs_layout: bool,
    pub(crate) root: Option<RootState>,
    pub(crate) geometry: Option<Geometry>,
    pub(crate) scroll_left: f32,
    pub(crate) scroll_top: f32,
    pub(crate) is_fully_clipped: bool,
}

impl FlexNode {
    pub(crate) fn new(key: NodeId, parent_flex: Option<(NodeId, u32)>) -> Self {
        let (parent_flex, depth, root) = match parent_flex {
            Some((parent, parent_depth)) => (Some(parent), parent_depth + 1, None),
            None => (None, 0, Some(RootState::default())),
        };
        Self {
            record: StyleRecord::new(key),
            depth,
            parent_flex,
            needs_layout: true,
            root,
            geometry: None,
            scroll_left: 0.0,
            scroll_top: 0.0,
            is_fully_clipped: false,
        }
    }

    pub fn key(&self) -> NodeId {
        self.record.key()
    }

    pub fn style(&self) -> &FlexStyle {
        self.record.style()
    }

    /// 0 for a layout root.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Nearest layout ancestor. `None` for a layout root.
    pub fn parent_flex(&self) -> Option<NodeId> {
        self.parent_flex
    }

    pub fn is_layout_root(&self) -> bool {
        self.root.is_some()
    }

    /// Where the root is in its solve cycle. `None` for non-root nodes.
    pub fn root_phase(&self) -> Option<RootPhase> {
        self.root.as_ref().map(RootState::phase)
    }

    pub fn needs_layout(&self) -> bool {
        self.needs_layout
    }

    /// Marks the node dirty (or clean). Picked up by the next update pass.
    pub fn set_needs_layout(&mut self, dirty: bool) -> &mut Self {
        self.needs_layout = dirty;
        self
    }

    /// `None` until the first solve that included this node has been applied.
    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn is_fully_clipped(&self) -> bool {
        self.is_fully_clipped
    }

    pub fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    pub fn scroll_top(&self) -> f32 {
        self.scroll_top
    }

    /// Takes effect, clamped to the scrollable range, on the next update pass.
    pub fn set_scroll_left(&mut self, value: f32) -> &mut Self {
        self.scroll_left = value;
        self
    }

    /// See [`FlexNode::set_scroll_left`].
    pub fn set_scroll_top(&mut self, value: f32) -> &mut Self {
        self.scroll_top = value;
        self
    }

    pub fn margin(&self) -> &BoxSides {
        &self.style().margin
    }

    pub fn padding(&self) -> &BoxSides {
        &self.style().padding
    }

    pub fn border_width(&self) -> &BoxSides {
        &self.style().border_width
    }

    style_setters! {
        set_width => width: Dimension,
        set_height => height: Dimension,
        set_min_width => min_width: Dimension,
        set_min_height => min_height: Dimension,
        set_max_width => max_width: Dimension,
        set_max_height => max_height: Dimension,
        set_aspect_ratio => aspect_ratio: Option<f32>,
        set_flex_direction => flex_direction: FlexDirection,
        set_flex_wrap => flex_wrap: FlexWrap,
        set_flex => flex: Option<f32>,
        set_flex_grow => flex_grow: Option<f32>,
        set_flex_shrink => flex_shrink: Option<f32>,
        set_flex_basis => flex_basis: Dimension,
        set_align_content => align_content: AlignContent,
        set_align_items => align_items: AlignItems,
        set_align_self => align_self: AlignSelf,
        set_justify_content => justify_content: JustifyContent,
        set_position => position: PositionType,
        set_top => top: Dimension,
        set_right => right: Dimension,
        set_bottom => bottom: Dimension,
        set_left => left: Dimension,
        set_overflow => overflow: Overflow,
    }

    sides_setters! {
        set_margin => margin,
        set_padding => padding,
        set_border_width => border_width,
    }

    /// Clamps the scroll offsets to what the current geometry allows.
    pub(crate) fn clamp_scroll(&mut self) {
        if let Some(geometry) = &self.geometry {
            self.scroll_left = self.scroll_left.clamp(0.0, geometry.max_scroll_left());
            self.scroll_top = self.scroll_top.clamp(0.0, geometry.max_scroll_top());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_types::LayoutBox;

    fn node() -> FlexNode {
        let mut node = FlexNode::new(NodeId::new(1, 0), Some((NodeId::new(0, 0), 0)));
        node.needs_layout = false;
        node
    }

    #[test]
    fn test_unchanged_write_keeps_node_clean() {
        let mut node = node();
        node.set_width(Dimension::Auto).set_flex_direction(FlexDirection::Column);
        assert!(!node.needs_layout());

        node.set_width(Dimension::Points(10.0));
        assert!(node.needs_layout());
        assert_eq!(node.style().width, Dimension::Points(10.0));
    }

    #[test]
    fn test_sides_setter_is_pointer_stable() {
        let mut node = node();
        node.set_padding([4.0f32, 8.0]);
        assert_eq!(node.padding().as_array(), &[4.0, 8.0, 4.0, 8.0]);
        let before = node.padding().clone();

        node.needs_layout = false;
        node.set_padding(vec![4.0f32, 8.0, 4.0, 8.0]);
        assert!(!node.needs_layout());
        assert!(BoxSides::ptr_eq(&before, node.padding()));

        node.set_padding(2.0f32);
        assert!(node.needs_layout());
        assert!(!BoxSides::ptr_eq(&before, node.padding()));
    }

    #[test]
    fn test_new_nodes_start_dirty_with_fixed_depth() {
        let root = FlexNode::new(NodeId::new(0, 0), None);
        assert!(root.needs_layout());
        assert!(root.is_layout_root());
        assert_eq!(root.depth(), 0);
        assert_eq!(root.root_phase(), Some(RootPhase::Idle));

        let child = FlexNode::new(NodeId::new(1, 0), Some((root.key(), root.depth())));
        assert_eq!(child.depth(), 1);
        assert_eq!(child.parent_flex(), Some(root.key()));
        assert_eq!(child.root_phase(), None);
        assert!(child.geometry().is_none());
    }

    #[test]
    fn test_scroll_clamps_to_extent() {
        let mut node = node();
        let mut geometry = Geometry::solved(
            LayoutBox::new(0.0, 0.0, 100.0, 100.0),
            &BoxSides::zero(),
            &BoxSides::zero(),
        );
        geometry.scroll_height = 150.0;
        node.geometry = Some(geometry);
        node.set_scroll_top(1000.0).set_scroll_left(-5.0);
        node.clamp_scroll();
        assert_eq!(node.scroll_top(), 50.0);
        assert_eq!(node.scroll_left(), 0.0);
    }
}
