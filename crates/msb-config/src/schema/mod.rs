//! Configuration schema types for MSB.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the app ships with.

mod layout;
mod startup;
mod system;
mod webview;
mod window;

pub use layout::*;
pub use startup::*;
pub use system::*;
pub use webview::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Root configuration for MSB.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MsbConfig {
    pub layout: LayoutConfig,
    pub window: WindowConfig,
    pub startup: StartupConfig,
    pub webview: WebViewSettings,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sections() {
        let config = MsbConfig::default();
        assert_eq!(config.layout.panel_gap, 18);
        assert_eq!(config.layout.min_even_width, 280);
        assert_eq!(config.layout.min_drag_width, 260);
        assert_eq!(config.layout.fallback_width, 320);
        assert_eq!(config.window.title, "MSB | Multi-Sites Browsing");
        assert_eq!(config.window.width, 1280);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.startup.split, None);
        assert!(config.startup.urls.is_empty());
        assert!(!config.webview.devtools);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: MsbConfig = toml::from_str("").unwrap();
        assert_eq!(config, MsbConfig::default());
    }

    #[test]
    fn partial_section_keeps_other_fields() {
        let config: MsbConfig = toml::from_str("[layout]\npanel_gap = 4\n").unwrap();
        assert_eq!(config.layout.panel_gap, 4);
        assert_eq!(config.layout.min_even_width, 280);
        assert_eq!(config.window.width, 1280);
    }
}
