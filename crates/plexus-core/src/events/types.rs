//! Event payload types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Kind of user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

/// A user-facing message.
///
/// Informational and success messages auto-dismiss; errors persist until
/// replaced by the next message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    /// Build an informational message.
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Info,
        }
    }

    /// Build a success message.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    /// Build an error message.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    /// How long the message should stay visible, or `None` to persist.
    pub fn dismiss_after(&self, dismiss_secs: u64) -> Option<Duration> {
        match self.kind {
            MessageKind::Error => None,
            MessageKind::Info | MessageKind::Success => Some(Duration::from_secs(dismiss_secs)),
        }
    }
}

/// Which input produced a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadSource {
    Combined,
    EdgeFile,
    NodeFile,
}

/// A load has started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadStartedEvent {
    pub source: LoadSource,
}

/// Why a data row was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowSkipReason {
    /// Fewer fields than the highest required column index.
    TooShort,
    /// A required id trimmed to empty.
    EmptyId,
}

/// A data row was skipped during ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowSkippedEvent {
    pub source: LoadSource,
    /// 1-based line number in the input file.
    pub line: usize,
    pub reason: RowSkipReason,
}

/// A load finished successfully.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCompleteEvent {
    pub source: LoadSource,
    pub nodes: usize,
    pub edges: usize,
    pub rows_skipped: usize,
}

/// A load failed; prior graph state is untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadFailedEvent {
    pub source: LoadSource,
    pub code: String,
    pub message: String,
}

/// Highlight marks were applied for a focus node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HighlightAppliedEvent {
    pub focus: String,
    pub nodes: usize,
    pub edges: usize,
}

/// A user-facing message was emitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageEvent {
    pub message: Message,
}
