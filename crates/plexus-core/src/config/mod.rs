//! Viewer configuration loaded from TOML.

mod viewer_config;

pub use viewer_config::{LayoutConfig, MessageConfig, ViewerConfig};
