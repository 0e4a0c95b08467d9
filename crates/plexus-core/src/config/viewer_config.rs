//! Viewer configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{
    CATEGORY_PALETTE, DEFAULT_LAYOUT_NODE_HEIGHT, DEFAULT_LAYOUT_NODE_WIDTH,
    DEFAULT_MESSAGE_DISMISS_SECS,
};
use crate::errors::ConfigError;

/// Configuration for the graph viewer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewerConfig {
    pub layout: LayoutConfig,
    pub messages: MessageConfig,
    /// Palette override for category colors. Default: built-in palette.
    pub palette: Option<Vec<String>>,
}

/// Configuration for the layout hand-off.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LayoutConfig {
    /// Nominal node width in pixels. Default: 60.
    pub node_width: Option<f64>,
    /// Nominal node height in pixels. Default: 60.
    pub node_height: Option<f64>,
}

/// Configuration for user-facing messages.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MessageConfig {
    /// Seconds before non-error messages auto-dismiss. Default: 5.
    pub dismiss_after_secs: Option<u64>,
}

impl ViewerConfig {
    /// Parse a config from TOML text.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Effective category palette, falling back to the built-in one.
    pub fn effective_palette(&self) -> Vec<String> {
        match &self.palette {
            Some(p) if !p.is_empty() => p.clone(),
            _ => CATEGORY_PALETTE.iter().map(|c| (*c).to_string()).collect(),
        }
    }
}

impl LayoutConfig {
    /// Effective node width, defaulting to 60.
    pub fn effective_node_width(&self) -> f64 {
        self.node_width.unwrap_or(DEFAULT_LAYOUT_NODE_WIDTH)
    }

    /// Effective node height, defaulting to 60.
    pub fn effective_node_height(&self) -> f64 {
        self.node_height.unwrap_or(DEFAULT_LAYOUT_NODE_HEIGHT)
    }
}

impl MessageConfig {
    /// Effective auto-dismiss interval in seconds, defaulting to 5.
    pub fn effective_dismiss_after_secs(&self) -> u64 {
        self.dismiss_after_secs.unwrap_or(DEFAULT_MESSAGE_DISMISS_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = ViewerConfig::default();
        assert_eq!(config.layout.effective_node_width(), 60.0);
        assert_eq!(config.layout.effective_node_height(), 60.0);
        assert_eq!(config.messages.effective_dismiss_after_secs(), 5);
        assert_eq!(config.effective_palette().len(), CATEGORY_PALETTE.len());
    }

    #[test]
    fn partial_toml_overrides_only_named_fields() {
        let config = ViewerConfig::from_toml(
            r#"
            [layout]
            node_width = 80.0

            [messages]
            dismiss_after_secs = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.layout.effective_node_width(), 80.0);
        assert_eq!(config.layout.effective_node_height(), 60.0);
        assert_eq!(config.messages.effective_dismiss_after_secs(), 3);
    }

    #[test]
    fn empty_palette_override_falls_back_to_builtin() {
        let config = ViewerConfig::from_toml("palette = []").unwrap();
        assert_eq!(config.effective_palette().len(), CATEGORY_PALETTE.len());
    }
}
