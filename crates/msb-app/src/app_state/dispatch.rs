//! Action dispatch: routes resolved actions to the session and the embed helpers.

use msb_common::{Action, PanelId};
use msb_layout::panel::ZOOM_STEP;
use msb_layout::{LayoutCommand, SplitCount};

use super::core::MsbApp;

impl MsbApp {
    /// Dispatch a resolved [`Action`] to the appropriate subsystem.
    pub(super) fn dispatch(&mut self, action: Action) {
        let changed = match &action {
            Action::StartSplit(n) => match SplitCount::try_from(*n) {
                Ok(count) => {
                    self.session.execute(LayoutCommand::StartSplit(count));
                    tracing::info!(
                        session = %self.session.id(),
                        panels = count.get(),
                        "Split started"
                    );
                    self.reflow();
                    true
                }
                Err(e) => {
                    tracing::warn!("StartSplit rejected: {e}");
                    false
                }
            },
            Action::ClosePanel(id) => self.close_panel(*id),
            Action::SetInput { panel, text } => self
                .session
                .execute(LayoutCommand::SetInput(*panel, text.clone())),
            Action::SubmitAddress(id) => self.submit_address(*id),
            Action::OpenExternal(id) => {
                self.open_external(*id);
                false
            }
            Action::ToggleMute(id) => self.session.execute(LayoutCommand::ToggleMute(*id)),
            Action::ZoomIn(id) => self
                .session
                .execute(LayoutCommand::AdjustZoom(*id, ZOOM_STEP)),
            Action::ZoomOut(id) => self
                .session
                .execute(LayoutCommand::AdjustZoom(*id, -ZOOM_STEP)),
            Action::ZoomReset(id) => self.session.execute(LayoutCommand::ResetZoom(*id)),
            Action::ResizeBegin { panel, x, width } => {
                self.session.execute(LayoutCommand::BeginResize {
                    panel: *panel,
                    pointer_x: *x,
                    current_width: *width,
                })
            }
            Action::ResizeMove { x } => self.session.execute(LayoutCommand::DragMove(*x)),
            Action::ResizeEnd => self.session.execute(LayoutCommand::EndResize),
            Action::ShellReady => {
                tracing::info!("Shell ready");
                self.shell_ready = true;
                // The shell starts blank; always send it the current state.
                true
            }
            Action::ViewportMeasured { width } => self.viewport_measured(*width),
            Action::Quit => {
                self.should_exit = true;
                false
            }
        };

        tracing::debug!(
            session = %self.session.id(),
            action = action.name(),
            panel = action.panel().map(|p| p.0),
            changed,
            "action dispatched"
        );

        if changed && action.changes_view() {
            self.needs_push = true;
        }
    }

    fn close_panel(&mut self, id: PanelId) -> bool {
        if !self.session.execute(LayoutCommand::Close(id)) {
            return false;
        }
        if self.session.is_landing() {
            tracing::info!(session = %self.session.id(), %id, "Last panel closed, back to landing");
        } else {
            tracing::info!(
                session = %self.session.id(),
                %id,
                remaining = self.session.panels().len(),
                "Panel closed"
            );
            self.reflow();
        }
        true
    }

    /// Normalize the address field and commit it as the panel's url.
    fn submit_address(&mut self, id: PanelId) -> bool {
        let Some(raw) = self.session.pending_address(id) else {
            return false;
        };
        let normalized = msb_embed::normalize_address(raw);
        self.session
            .execute(LayoutCommand::CommitAddress(id, normalized))
    }

    fn open_external(&self, id: PanelId) {
        let Some(url) = self.session.external_target(id) else {
            tracing::debug!(%id, "Open ignored: panel has no address");
            return;
        };
        if let Err(e) = msb_embed::open_external(url) {
            tracing::warn!(%id, error = %e, "Failed to open address externally");
        }
    }

    fn viewport_measured(&mut self, width: f64) -> bool {
        if !(width.is_finite() && width >= 1.0) {
            tracing::warn!(width, "Ignoring bogus viewport width");
            return false;
        }
        let width = width.round().min(f64::from(u32::MAX)) as u32;
        let changed_width = self.viewport_width != Some(width);
        self.viewport_width = Some(width);
        self.session.execute(LayoutCommand::ApplyEvenWidths(width)) || changed_width
    }

    /// Redistribute even widths after the panel row changed size.
    fn reflow(&mut self) {
        if let Some(width) = self.viewport_width {
            self.session.execute(LayoutCommand::ApplyEvenWidths(width));
        }
    }
}
