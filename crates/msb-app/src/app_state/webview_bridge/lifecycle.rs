//! Shell webview lifecycle: create, resize, poll events.

use msb_common::MsbError;
use msb_webview::{PageLoadState, WebViewConfig, WebViewEvent, WebViewManager, SHELL_URL};

use crate::app_state::core::MsbApp;

use super::bounds::window_bounds;

impl MsbApp {
    /// Build the shell webview over the whole window.
    pub(in crate::app_state) fn create_shell(
        &mut self,
        manager: WebViewManager,
    ) -> msb_common::Result<()> {
        let Some(window) = &self.window else {
            return Err(MsbError::Window("shell needs a window".into()));
        };

        let settings = &self.config.webview;
        let config = WebViewConfig {
            devtools: settings.devtools || cfg!(debug_assertions),
            user_agent: settings.user_agent.clone(),
            ..WebViewConfig::with_url(SHELL_URL)
        };

        let handle = manager
            .create(window.as_ref(), window_bounds(window.inner_size()), config)
            .map_err(|e| MsbError::WebView(e.to_string()))?;
        if settings.devtools {
            handle.open_devtools();
        }
        if let Err(e) = handle.focus() {
            tracing::debug!(error = %e, "Could not focus shell webview");
        }
        tracing::info!(url = SHELL_URL, "Shell webview created");
        self.shell = Some(handle);
        self.webviews = Some(manager);
        Ok(())
    }

    /// Keep the shell covering the window after a resize.
    pub(in crate::app_state) fn sync_shell_bounds(&self) {
        let (Some(window), Some(shell)) = (&self.window, &self.shell) else {
            return;
        };
        if let Err(e) = shell.set_bounds(window_bounds(window.inner_size())) {
            tracing::warn!(error = %e, "Failed to resize shell webview");
        }
    }

    /// Drain webview callbacks and act on them.
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events = match &self.webviews {
            Some(manager) => manager.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { body } => self.handle_ipc_message(&body),
                WebViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "shell page load");
                    // A reload wipes the shell's handlers until it says ready again.
                    let is_shell = url.starts_with("msb:") || url.contains("msb.localhost");
                    if is_shell && state == PageLoadState::Started {
                        self.shell_ready = false;
                    }
                }
                WebViewEvent::TitleChanged { title } => {
                    tracing::trace!(title = %title, "shell document title");
                }
                WebViewEvent::NavigationRequested { .. } => {}
                WebViewEvent::NavigationBlocked { url } => {
                    tracing::debug!(url = %url, "shell refused a navigation");
                }
            }
        }
    }
}
