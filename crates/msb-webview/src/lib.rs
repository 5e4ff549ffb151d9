//! WebView bridge hosting the MSB shell.
//!
//! Wraps the `wry` crate to provide:
//! - The shell WebView that renders the split layout
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - The `msb://` custom protocol for the bundled shell assets
//! - Navigation policy and event collection for the main loop

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;

pub use content::{Asset, ContentProvider};
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::IpcMessage;
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};

/// Scheme of the custom protocol serving the shell.
pub const SHELL_SCHEME: &str = "msb";

/// Entry point of the shell.
pub const SHELL_URL: &str = "msb://localhost/index.html";
