use serde::{Deserialize, Serialize};

/// How a node participates in its parent's flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PositionType {
    #[default]
    Relative,
    /// Taken out of flow and placed by its insets. Escapes ancestor clipping.
    Absolute,
}

/// What happens to content that overflows a node's client box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
}

impl Overflow {
    /// Whether descendants are clipped to this node's client box.
    pub fn clips(self) -> bool {
        self != Overflow::Visible
    }
}
