//! Shared constants for the app state.

use std::time::Duration;

/// How often the loop drains webview events while idle.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);
