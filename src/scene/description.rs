//! JSON scene descriptions and layout reports.
use super::SceneTree;
use crate::error::TrellisError;
use crate::flex::{FlexNode, Geometry};
use serde::{Deserialize, Serialize};
use trellis_style::{
    AlignContent, AlignItems, AlignSelf, Dimension, FlexDirection, FlexWrap, JustifyContent,
    Overflow, PositionType, SidesInput,
};
use trellis_types::NodeId;

/// Style inputs as they appear in a description. Absent keys keep defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleInput {
    pub width: Option<Dimension>,
    pub height: Option<Dimension>,
    pub min_width: Option<Dimension>,
    pub min_height: Option<Dimension>,
    pub max_width: Option<Dimension>,
    pub max_height: Option<Dimension>,
    #[serde(deserialize_with = "trellis_style::deserialize_aspect_ratio")]
    pub aspect_ratio: Option<f32>,
    pub flex_direction: Option<FlexDirection>,
    pub flex_wrap: Option<FlexWrap>,
    pub flex: Option<f32>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_basis: Option<Dimension>,
    pub align_content: Option<AlignContent>,
    pub align_items: Option<AlignItems>,
    pub align_self: Option<AlignSelf>,
    pub justify_content: Option<JustifyContent>,
    pub position: Option<PositionType>,
    pub top: Option<Dimension>,
    pub right: Option<Dimension>,
    pub bottom: Option<Dimension>,
    pub left: Option<Dimension>,
    pub overflow: Option<Overflow>,
    pub margin: Option<SidesInput>,
    pub padding: Option<SidesInput>,
    pub border_width: Option<SidesInput>,
}

macro_rules! apply_inputs {
    ($input:expr, $node:expr; $($field:ident => $setter:ident),* $(,)?) => {
        $(
            if let Some(value) = $input.$field.clone() {
                $node.$setter(value);
            }
        )*
    };
}

impl StyleInput {
    /// Writes every present input through the node's setters.
    pub fn apply_to(&self, node: &mut FlexNode) {
        apply_inputs!(self, node;
            width => set_width,
            height => set_height,
            min_width => set_min_width,
            min_height => set_min_height,
            max_width => set_max_width,
            max_height => set_max_height,
            flex_direction => set_flex_direction,
            flex_wrap => set_flex_wrap,
            flex_basis => set_flex_basis,
            align_content => set_align_content,
            align_items => set_align_items,
            align_self => set_align_self,
            justify_content => set_justify_content,
            position => set_position,
            top => set_top,
            right => set_right,
            bottom => set_bottom,
            left => set_left,
            overflow => set_overflow,
            margin => set_margin,
            padding => set_padding,
            border_width => set_border_width,
        );
        if self.aspect_ratio.is_some() {
            node.set_aspect_ratio(self.aspect_ratio);
        }
        if self.flex.is_some() {
            node.set_flex(self.flex);
        }
        if self.flex_grow.is_some() {
            node.set_flex_grow(self.flex_grow);
        }
        if self.flex_shrink.is_some() {
            node.set_flex_shrink(self.flex_shrink);
        }
    }
}

fn default_layout() -> bool {
    true
}

/// One node of a description.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescription {
    #[serde(default)]
    pub name: Option<String>,
    /// Plain scene nodes (`"layout": false`) group children without taking
    /// part in layout themselves.
    #[serde(default = "default_layout")]
    pub layout: bool,
    #[serde(flatten)]
    pub style: StyleInput,
    #[serde(default)]
    pub scroll_left: f32,
    #[serde(default)]
    pub scroll_top: f32,
    #[serde(default)]
    pub children: Vec<NodeDescription>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub roots: Vec<NodeDescription>,
}

impl SceneDescription {
    pub fn from_json(json: &str) -> Result<Self, TrellisError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A node's computed layout, as printed by the CLI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeReport {
    pub id: String,
    pub name: String,
    pub layout: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    pub scroll_left: f32,
    pub scroll_top: f32,
    pub fully_clipped: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LayoutReport {
    pub roots: Vec<NodeReport>,
}

impl SceneTree<String> {
    /// Instantiates a description. Returns the ids of the new top-level nodes.
    pub fn build_from_description(&mut self, description: &SceneDescription) -> Result<Vec<NodeId>, TrellisError> {
        let mut created = Vec::with_capacity(description.roots.len());
        let mut stack: Vec<(&NodeDescription, Option<NodeId>)> =
            description.roots.iter().rev().map(|d| (d, None)).collect();

        while let Some((desc, parent)) = stack.pop() {
            let name = desc.name.clone().unwrap_or_default();
            let id = if desc.layout {
                let id = self.insert_flex(parent, name)?;
                let node = self.try_flex_mut(id)?;
                desc.style.apply_to(node);
                node.set_scroll_left(desc.scroll_left).set_scroll_top(desc.scroll_top);
                id
            } else {
                self.insert(parent, name)?
            };
            if parent.is_none() {
                created.push(id);
            }
            for child in desc.children.iter().rev() {
                stack.push((child, Some(id)));
            }
        }
        Ok(created)
    }

    /// Current layout of every top-level subtree.
    pub fn layout_report(&self) -> LayoutReport {
        LayoutReport {
            roots: self.top_level.iter().filter_map(|id| self.node_report(*id)).collect(),
        }
    }

    fn node_report(&self, id: NodeId) -> Option<NodeReport> {
        let name = self.get(id)?;
        let flex = self.flex(id);
        Some(NodeReport {
            id: id.to_string(),
            name: name.clone(),
            layout: flex.is_some(),
            depth: flex.map(|f| f.depth()),
            geometry: flex.and_then(|f| f.geometry().copied()),
            scroll_left: flex.map_or(0.0, |f| f.scroll_left()),
            scroll_top: flex.map_or(0.0, |f| f.scroll_top()),
            fully_clipped: flex.is_some_and(|f| f.is_fully_clipped()),
            children: self
                .children(id)
                .iter()
                .filter_map(|child| self.node_report(*child))
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_parses_camel_case_styles() {
        let desc = SceneDescription::from_json(
            r#"{ "roots": [ {
                "name": "panel",
                "width": 300,
                "height": "50%",
                "flexDirection": "row",
                "padding": [4, 8],
                "overflow": "scroll",
                "scrollTop": 12,
                "flex": 2,
                "children": [ { "name": "group", "layout": false } ]
            } ] }"#,
        )
        .unwrap();
        let panel = &desc.roots[0];
        assert_eq!(panel.name.as_deref(), Some("panel"));
        assert!(panel.layout);
        assert_eq!(panel.style.flex, Some(2.0));
        assert_eq!(panel.style.width, Some(Dimension::Points(300.0)));
        assert_eq!(panel.style.height, Some(Dimension::Percent(50.0)));
        assert_eq!(panel.style.flex_direction, Some(FlexDirection::Row));
        assert_eq!(panel.style.padding.as_ref().map(SidesInput::expand), Some([4.0, 8.0, 4.0, 8.0]));
        assert_eq!(panel.scroll_top, 12.0);
        assert!(!panel.children[0].layout);
    }

    #[test]
    fn test_auto_keywords_parse_as_solver_defaults() {
        let desc = SceneDescription::from_json(
            r#"{ "roots": [ {
                "alignItems": "auto",
                "alignContent": "auto",
                "aspectRatio": "auto",
                "children": [ { "alignContent": "baseline", "aspectRatio": 1.5 } ]
            } ] }"#,
        )
        .unwrap();
        let root = &desc.roots[0].style;
        assert_eq!(root.align_items, Some(AlignItems::Auto));
        assert_eq!(root.align_content, Some(AlignContent::Auto));
        assert_eq!(root.aspect_ratio, None);

        let child = &desc.roots[0].children[0].style;
        assert_eq!(child.align_content, Some(AlignContent::Baseline));
        assert_eq!(child.aspect_ratio, Some(1.5));
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let result = SceneDescription::from_json(r#"{ "roots": [ { "flexDirection": "diagonal" } ] }"#);
        assert!(result.is_err());
    }
}
