use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Width offered to each layout root.
    ///
    /// `None` lets the root size itself to its max-content width. A root with
    /// an explicit width ignores this either way.
    pub available_width: Option<f32>,

    /// Height offered to each layout root. See `available_width`.
    pub available_height: Option<f32>,

    /// Snap solved boxes to whole units.
    ///
    /// Scene units are not pixels, so this defaults to `false`.
    pub round_to_pixels: bool,
}

impl LayoutConfig {
    pub fn with_available_size(width: f32, height: f32) -> Self {
        Self {
            available_width: Some(width),
            available_height: Some(height),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_partial_config() {
        let config: LayoutConfig = serde_json::from_str(r#"{ "availableWidth": 1024, "roundToPixels": true }"#).unwrap();
        assert_eq!(config.available_width, Some(1024.0));
        assert_eq!(config.available_height, None);
        assert!(config.round_to_pixels);
    }
}
