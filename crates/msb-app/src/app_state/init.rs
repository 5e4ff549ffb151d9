//! Window creation and shell webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use msb_common::MsbError;
use msb_webview::WebViewManager;

use crate::assets::shell_content;

use super::core::MsbApp;

impl MsbApp {
    /// Create the window and the shell webview inside it.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> msb_common::Result<()> {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.as_str())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ))
            .with_min_inner_size(winit::dpi::LogicalSize::new(640.0, 480.0));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| MsbError::Window(e.to_string()))?;
        self.last_title = window_config.title.clone();
        self.window = Some(window);

        let manager = self.initialize_webviews();
        self.create_shell(manager)?;

        tracing::info!("Window and shell created");
        Ok(())
    }

    /// Set up the webview manager with the content provider for `msb://`.
    fn initialize_webviews(&self) -> WebViewManager {
        let assets_dir = self.config.webview.assets_dir.as_ref();
        let mut manager = WebViewManager::new();
        manager.set_content_provider(shell_content(assets_dir));

        match assets_dir {
            Some(dir) => tracing::info!(assets_dir = %dir.display(), "Serving shell from disk"),
            None => tracing::info!("Serving bundled shell"),
        }
        manager
    }
}
