//! MSB configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use msb_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("panel gap: {}px", config.layout.panel_gap);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{LogLevel, MsbConfig};

use msb_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory and creates a default
/// if none exists.
pub fn load_config() -> Result<MsbConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path, e.g. `--config`.
///
/// Unlike [`load_config`], a missing file is an error rather than a
/// reason to write the template.
pub fn load_config_from(path: &Path) -> Result<MsbConfig, ConfigError> {
    toml_loader::load_from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_from_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_from(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
