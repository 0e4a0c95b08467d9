//! Top-level viewer error.

use super::config_error::ConfigError;
use super::error_code::{self, PlexusErrorCode};
use super::ingest_error::IngestError;
use super::layout_error::LayoutError;

/// Top-level error for viewer operations, wrapping subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown node: {0}")]
    UnknownNode(String),

    #[error("unknown edge: {0}")]
    UnknownEdge(String),
}

impl PlexusErrorCode for ViewerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Ingest(e) => e.error_code(),
            Self::Layout(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::UnknownNode(_) | Self::UnknownEdge(_) => error_code::VIEWER_ERROR,
        }
    }
}
