//! WebView lifecycle management.
//!
//! `WebViewManager` builds the shell `wry::WebView` and owns the queue its
//! callbacks push events into.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Creates the shell WebView and collects its events.
pub struct WebViewManager {
    /// Event sink. The main event loop drains it every poll.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Optional content provider for the `msb://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    /// Create a new WebView manager.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *events)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_the_queue() {
        let manager = WebViewManager::new();
        handlers::push(
            &manager.events,
            WebViewEvent::IpcMessage {
                body: r#"{"kind":"shell_ready"}"#.into(),
            },
        );
        handlers::push(
            &manager.events,
            WebViewEvent::TitleChanged {
                title: "MSB".into(),
            },
        );

        let drained = manager.drain_events();
        assert_eq!(drained.len(), 2);
        assert!(matches!(drained[0], WebViewEvent::IpcMessage { .. }));
        assert!(manager.drain_events().is_empty());
    }
}
