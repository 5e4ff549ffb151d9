//! MsbApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use msb_common::Action;
use msb_config::schema::{LayoutConfig, MsbConfig};
use msb_layout::{LayoutMetrics, Session};
use msb_webview::{WebViewHandle, WebViewManager};

use crate::startup::StartupPlan;

/// Top-level application state.
pub struct MsbApp {
    pub(super) config: MsbConfig,

    // Layout
    pub(super) session: Session,
    /// Last grid width the shell reported, in CSS pixels.
    pub(super) viewport_width: Option<u32>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) last_title: String,

    // Shell webview
    pub(super) webviews: Option<WebViewManager>,
    pub(super) shell: Option<WebViewHandle>,
    /// The shell registered its IPC handlers; state pushes before this are lost.
    pub(super) shell_ready: bool,

    // Whether the app should exit
    pub(super) should_exit: bool,

    // Dirty flag -- set when the session changed and the shell needs a snapshot
    pub(super) needs_push: bool,
    pub(super) last_poll: Instant,
}

impl MsbApp {
    pub fn new(config: MsbConfig, plan: StartupPlan) -> Self {
        let session = Session::with_metrics(layout_metrics(&config.layout));
        tracing::info!(session = %session.id(), "Session created");

        let mut app = Self {
            config,
            session,
            viewport_width: None,
            window: None,
            last_title: String::new(),
            webviews: None,
            shell: None,
            shell_ready: false,
            should_exit: false,
            needs_push: true,
            last_poll: Instant::now(),
        };
        app.apply_startup(plan);
        app
    }

    /// Open the startup split and submit its addresses through the same
    /// path the address bar uses.
    fn apply_startup(&mut self, plan: StartupPlan) {
        let Some(count) = plan.split else {
            return;
        };
        self.dispatch(Action::StartSplit(count.get() as u32));

        let ids = self.session.panel_ids();
        for (id, url) in ids.into_iter().zip(plan.urls) {
            self.dispatch(Action::SetInput {
                panel: id,
                text: url,
            });
            self.dispatch(Action::SubmitAddress(id));
        }
    }
}

/// Pixel constraints for the session, from `[layout]`.
pub(super) fn layout_metrics(layout: &LayoutConfig) -> LayoutMetrics {
    LayoutMetrics {
        gap: layout.panel_gap,
        min_even_width: layout.min_even_width,
        min_drag_width: layout.min_drag_width,
        fallback_width: f64::from(layout.fallback_width),
    }
}
