//! PlexusErrorCode trait for structured codes at the UI boundary.

/// Trait for converting Plexus errors to stable code strings.
/// Every error enum implements this so the UI shell can switch on a
/// structured code instead of parsing display text.
pub trait PlexusErrorCode {
    /// Returns the stable error code string (e.g., "MISSING_COLUMN").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn code_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants for the UI boundary.
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const MISSING_COLUMN: &str = "MISSING_COLUMN";
pub const NO_VALID_ROWS: &str = "NO_VALID_ROWS";
pub const LAYOUT_ERROR: &str = "LAYOUT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const VIEWER_ERROR: &str = "VIEWER_ERROR";
