//! Synchronous event dispatch to registered handlers.

use super::handler::ViewerEventHandler;
use super::types::*;

/// Dispatches viewer events synchronously to registered handlers.
///
/// Zero overhead when no handlers are registered.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Box<dyn ViewerEventHandler>>,
}

impl EventDispatcher {
    /// Create an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler.
    pub fn register(&mut self, handler: Box<dyn ViewerEventHandler>) {
        self.handlers.push(handler);
    }

    /// Number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn emit_load_started(&self, event: &LoadStartedEvent) {
        for h in &self.handlers {
            h.on_load_started(event);
        }
    }

    pub fn emit_row_skipped(&self, event: &RowSkippedEvent) {
        for h in &self.handlers {
            h.on_row_skipped(event);
        }
    }

    pub fn emit_load_complete(&self, event: &LoadCompleteEvent) {
        for h in &self.handlers {
            h.on_load_complete(event);
        }
    }

    pub fn emit_load_failed(&self, event: &LoadFailedEvent) {
        for h in &self.handlers {
            h.on_load_failed(event);
        }
    }

    pub fn emit_highlight_applied(&self, event: &HighlightAppliedEvent) {
        for h in &self.handlers {
            h.on_highlight_applied(event);
        }
    }

    pub fn emit_highlight_cleared(&self) {
        for h in &self.handlers {
            h.on_highlight_cleared();
        }
    }

    pub fn emit_message(&self, event: &MessageEvent) {
        for h in &self.handlers {
            h.on_message(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[derive(Default)]
    struct Counter {
        messages: Arc<AtomicUsize>,
    }

    impl ViewerEventHandler for Counter {
        fn on_message(&self, _event: &MessageEvent) {
            self.messages.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn dispatches_to_every_handler() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(Box::new(Counter {
            messages: Arc::clone(&count),
        }));
        dispatcher.register(Box::new(Counter {
            messages: Arc::clone(&count),
        }));

        dispatcher.emit_message(&MessageEvent {
            message: Message::info("hello"),
        });
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn empty_dispatcher_is_a_no_op() {
        let dispatcher = EventDispatcher::new();
        assert_eq!(dispatcher.handler_count(), 0);
        dispatcher.emit_highlight_cleared();
    }
}
