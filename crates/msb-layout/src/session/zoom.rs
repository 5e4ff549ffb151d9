//! Per-panel zoom.

use msb_common::PanelId;

use crate::panel::{PanelUpdate, DEFAULT_ZOOM};

use super::Session;

impl Session {
    /// Add `delta` to the panel's zoom, rounded to two decimals and clamped.
    pub fn adjust_zoom(&mut self, id: PanelId, delta: f64) -> bool {
        let Some(zoom) = self.panel(id).map(|p| p.zoom) else {
            return false;
        };
        self.update_pane(id, PanelUpdate::zoom(zoom + delta))
    }

    pub fn reset_zoom(&mut self, id: PanelId) -> bool {
        self.update_pane(id, PanelUpdate::zoom(DEFAULT_ZOOM))
    }
}
