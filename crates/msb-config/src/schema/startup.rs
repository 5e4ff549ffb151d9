//! Startup layout configuration types.

use serde::{Deserialize, Serialize};

/// What the window shows when it opens.
///
/// With no `split` the app starts on the landing screen. `urls` fill the
/// panels in order and are only used together with a split.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartupConfig {
    /// Number of panels to open immediately (valid range: 2-4).
    pub split: Option<u32>,
    pub urls: Vec<String>,
}
