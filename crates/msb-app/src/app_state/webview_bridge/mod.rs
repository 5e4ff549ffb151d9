//! Bridge between the app state and the shell webview: creation, bounds,
//! event polling, and IPC validation.

mod bounds;
mod ipc_dispatch;
mod lifecycle;
