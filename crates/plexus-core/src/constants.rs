//! Shared constants for the Plexus graph viewer.

/// Plexus version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prefix for synthetic edge identifiers (`edge_0`, `edge_1`, ...).
pub const EDGE_ID_PREFIX: &str = "edge_";

/// Nominal node width handed to the layout engine, in pixels.
pub const DEFAULT_LAYOUT_NODE_WIDTH: f64 = 60.0;

/// Nominal node height handed to the layout engine, in pixels.
pub const DEFAULT_LAYOUT_NODE_HEIGHT: f64 = 60.0;

/// Seconds before informational/success messages auto-dismiss.
pub const DEFAULT_MESSAGE_DISMISS_SECS: u64 = 5;

/// Default edge weight when the field is absent or unparseable.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Inner separator for multi-value fields (papers, organizations).
pub const LIST_FIELD_SEPARATOR: char = '|';

/// Fill color for nodes without a category.
pub const DEFAULT_NODE_COLOR: &str = "#3498db";

/// Fixed category palette, assigned to categories in first-seen order and
/// cycled when categories outnumber entries.
pub const CATEGORY_PALETTE: &[&str] = &[
    "#e74c3c", "#2ecc71", "#f39c12", "#9b59b6", "#1abc9c",
    "#e67e22", "#34495e", "#16a085", "#d35400", "#2980b9",
];
