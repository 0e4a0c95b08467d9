//! Layout engine errors.

use super::error_code::{self, PlexusErrorCode};

/// Errors reported by an external layout engine.
///
/// Layout failures are never fatal: the caller retries on the fallback
/// engine and, failing that, leaves node positions untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout engine '{engine}' failed: {message}")]
    EngineFailed { engine: String, message: String },

    #[error("layout engine '{engine}' returned {got} positions for {expected} nodes")]
    IncompleteLayout {
        engine: String,
        expected: usize,
        got: usize,
    },
}

impl PlexusErrorCode for LayoutError {
    fn error_code(&self) -> &'static str {
        error_code::LAYOUT_ERROR
    }
}
