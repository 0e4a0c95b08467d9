//! Event system for the viewer.
//! Trait with no-op defaults, synchronous dispatch, zero overhead when empty.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::ViewerEventHandler;
pub use types::{
    HighlightAppliedEvent, LoadCompleteEvent, LoadFailedEvent, LoadSource, LoadStartedEvent,
    Message, MessageEvent, MessageKind, RowSkipReason, RowSkippedEvent,
};
