//! Shell webview settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebViewSettings {
    /// Enable the webview inspector.
    pub devtools: bool,
    /// Custom user agent for the shell and its frames.
    pub user_agent: Option<String>,
    /// Serve the shell from this directory instead of the bundled assets.
    pub assets_dir: Option<PathBuf>,
}
