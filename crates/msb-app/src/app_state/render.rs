//! State snapshots pushed to the shell, and the window title.

use serde::Serialize;

use msb_common::PanelId;
use msb_layout::panel::zoom_percent;
use msb_layout::{Panel, Session};

use super::core::MsbApp;

/// Everything the shell needs to draw one frame of the layout.
#[derive(Debug, Serialize)]
pub(super) struct ShellState {
    /// `null` on the landing screen.
    pub pane_count: Option<usize>,
    pub reload_token: u64,
    /// Gap between panels, for the grid.
    pub gap: u32,
    pub panels: Vec<PanelView>,
}

#[derive(Debug, Serialize)]
pub(super) struct PanelView {
    pub id: PanelId,
    pub url: String,
    pub input: String,
    pub muted: bool,
    pub zoom: f64,
    pub zoom_percent: u32,
    pub width: Option<u32>,
    /// Frame address; carries mute parameters for hosts that support them.
    pub embed_src: String,
    /// Shown under the frame while muted; empty when mute is honored.
    pub mute_caveat: &'static str,
    /// Changes whenever the frame must be recreated.
    pub key: String,
}

impl PanelView {
    fn new(session: &Session, panel: &Panel) -> Self {
        Self {
            id: panel.id,
            url: panel.url.clone(),
            input: panel.input.clone(),
            muted: panel.muted,
            zoom: panel.zoom,
            zoom_percent: zoom_percent(panel.zoom),
            width: panel.width,
            embed_src: msb_embed::resolve_embed_address(&panel.url, panel.muted),
            mute_caveat: msb_embed::mute_caveat(&panel.url),
            key: session.remount_key(panel),
        }
    }
}

pub(super) fn snapshot(session: &Session) -> ShellState {
    ShellState {
        pane_count: session.pane_count(),
        reload_token: session.reload_token(),
        gap: session.metrics().gap,
        panels: session
            .panels()
            .iter()
            .map(|p| PanelView::new(session, p))
            .collect(),
    }
}

/// Window title for the current layout.
pub(super) fn window_title(base: &str, session: &Session) -> String {
    match session.pane_count() {
        None => base.to_string(),
        Some(1) => format!("{base} (1 panel)"),
        Some(n) => format!("{base} ({n} panels)"),
    }
}

impl MsbApp {
    /// Send the current session to the shell, if it is listening.
    pub(super) fn push_state(&mut self) {
        if !self.shell_ready {
            return;
        }
        let Some(shell) = &self.shell else {
            return;
        };

        let state = snapshot(&self.session);
        let payload = match serde_json::to_value(&state) {
            Ok(v) => v,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize shell state");
                return;
            }
        };

        match shell.send_ipc("state", &payload) {
            Ok(()) => {
                tracing::trace!(
                    panels = state.panels.len(),
                    reload_token = state.reload_token,
                    "state pushed"
                );
                self.needs_push = false;
            }
            Err(e) => tracing::warn!(error = %e, "Failed to push state to shell"),
        }

        self.update_window_title();
    }

    fn update_window_title(&mut self) {
        let title = window_title(&self.config.window.title, &self.session);
        if title == self.last_title {
            return;
        }
        if let Some(window) = &self.window {
            window.set_title(&title);
        }
        self.last_title = title;
    }
}
