use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("failed to launch external browser: {0}")]
    Launch(String),

    #[error("no browser launcher on this platform")]
    Unsupported,

    #[error("refusing to open non-web address: {0}")]
    NotWeb(String),
}

/// Failures that stop the app from bringing up its window.
#[derive(Debug, thiserror::Error)]
pub enum MsbError {
    #[error("window error: {0}")]
    Window(String),

    #[error("webview error: {0}")]
    WebView(String),
}
