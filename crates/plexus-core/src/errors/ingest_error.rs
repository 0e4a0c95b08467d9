//! Ingestion errors.

use super::error_code::{self, PlexusErrorCode};

/// Errors that abort ingestion of a single file.
///
/// Row-level problems (short rows, empty ids, unparseable weights) are not
/// errors: they are skipped or defaulted per row and surfaced as warnings.
/// An aborted ingestion leaves the prior graph state untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IngestError {
    #[error("input has no data rows")]
    EmptyInput,

    #[error("required column not found: {column}")]
    MissingRequiredColumn { column: String },

    #[error("no valid rows in input ({rows_seen} data rows, none usable)")]
    NoValidRows { rows_seen: usize },
}

impl PlexusErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyInput => error_code::EMPTY_INPUT,
            Self::MissingRequiredColumn { .. } => error_code::MISSING_COLUMN,
            Self::NoValidRows { .. } => error_code::NO_VALID_ROWS,
        }
    }
}
