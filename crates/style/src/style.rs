//! The complete set of flexbox inputs carried by one layout node.
use crate::dimension::Dimension;
use crate::flex::{AlignContent, AlignItems, AlignSelf, FlexDirection, FlexWrap, JustifyContent};
use crate::position::{Overflow, PositionType};
use crate::sides::BoxSides;
use serde::Serialize;

/// Style inputs for a single layout node.
///
/// Values are stored exactly as set; nothing here is validated. Box shorthands
/// are stored already expanded.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexStyle {
    pub width: Dimension,
    pub height: Dimension,
    pub min_width: Dimension,
    pub min_height: Dimension,
    pub max_width: Dimension,
    pub max_height: Dimension,
    pub aspect_ratio: Option<f32>,

    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    /// Single-number `flex` shorthand. See [`FlexStyle::resolved_grow`].
    pub flex: Option<f32>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_basis: Dimension,

    pub align_content: AlignContent,
    pub align_items: AlignItems,
    pub align_self: AlignSelf,
    pub justify_content: JustifyContent,

    pub position: PositionType,
    pub top: Dimension,
    pub right: Dimension,
    pub bottom: Dimension,
    pub left: Dimension,

    pub overflow: Overflow,

    pub margin: BoxSides,
    pub padding: BoxSides,
    pub border_width: BoxSides,
}

impl FlexStyle {
    /// Grow factor handed to the solver.
    ///
    /// An explicit `flex_grow` wins; otherwise a positive `flex` grows.
    pub fn resolved_grow(&self) -> f32 {
        self.flex_grow
            .unwrap_or_else(|| self.flex.filter(|f| *f > 0.0).unwrap_or(0.0))
    }

    /// Shrink factor handed to the solver.
    ///
    /// An explicit `flex_shrink` wins; otherwise a negative `flex` shrinks by
    /// its magnitude. Nodes do not shrink unless asked to.
    pub fn resolved_shrink(&self) -> f32 {
        self.flex_shrink
            .unwrap_or_else(|| self.flex.filter(|f| *f < 0.0).map_or(0.0, |f| -f))
    }
}
