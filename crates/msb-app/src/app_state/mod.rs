//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the layout session and the shell webview.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod polling;
mod render;
mod types;
mod webview_bridge;

pub use core::MsbApp;
