//! ViewerEventHandler trait with no-op defaults.

use super::types::*;

/// Trait for observing viewer events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. The trait requires `Send + Sync`
/// so handlers can be shared with a UI shell thread.
pub trait ViewerEventHandler: Send + Sync {
    // ---- Load lifecycle ----
    fn on_load_started(&self, _event: &LoadStartedEvent) {}
    fn on_row_skipped(&self, _event: &RowSkippedEvent) {}
    fn on_load_complete(&self, _event: &LoadCompleteEvent) {}
    fn on_load_failed(&self, _event: &LoadFailedEvent) {}

    // ---- Highlighting ----
    fn on_highlight_applied(&self, _event: &HighlightAppliedEvent) {}
    fn on_highlight_cleared(&self) {}

    // ---- Messages ----
    fn on_message(&self, _event: &MessageEvent) {}
}
