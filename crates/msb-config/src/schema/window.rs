//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Initial native window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width (valid range: 640-7680).
    pub width: u32,
    /// Logical height (valid range: 480-4320).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "MSB | Multi-Sites Browsing".into(),
            width: 1280,
            height: 800,
        }
    }
}
