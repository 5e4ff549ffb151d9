//! Core types and constructors for Session.

use msb_common::{PanelId, SessionId};

use crate::layout::LayoutMetrics;
use crate::panel::Panel;

use super::ResizeDrag;

/// Owns the whole split layout: the ordered panel row, the selected split
/// size, the reload token and any resize gesture in progress.
pub struct Session {
    /// Correlates log lines of this session.
    pub(super) id: SessionId,
    /// `None` while on the landing screen.
    pub(super) pane_count: Option<usize>,
    /// Display order = insertion order.
    pub(super) panels: Vec<Panel>,
    /// Bumped whenever every embed must remount.
    pub(super) reload_token: u64,
    /// Next panel id. Never reset, so ids are not reused across splits.
    pub(super) next_id: u32,
    pub(super) metrics: LayoutMetrics,
    pub(super) drag: Option<ResizeDrag>,
}

impl Session {
    /// A session on the landing screen.
    pub fn new() -> Self {
        Self::with_metrics(LayoutMetrics::default())
    }

    pub fn with_metrics(metrics: LayoutMetrics) -> Self {
        Self {
            id: SessionId::new(),
            pane_count: None,
            panels: Vec::new(),
            reload_token: 0,
            next_id: 1,
            metrics,
            drag: None,
        }
    }

    // -- Accessors --

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn pane_count(&self) -> Option<usize> {
        self.pane_count
    }

    /// `true` while no split is active.
    pub fn is_landing(&self) -> bool {
        self.pane_count.is_none()
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn panel(&self, id: PanelId) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }

    pub(super) fn panel_mut(&mut self, id: PanelId) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.id == id)
    }

    pub fn panel_ids(&self) -> Vec<PanelId> {
        self.panels.iter().map(|p| p.id).collect()
    }

    pub fn reload_token(&self) -> u64 {
        self.reload_token
    }

    pub fn metrics(&self) -> &LayoutMetrics {
        &self.metrics
    }

    /// Key that changes whenever the panel's embed must be recreated.
    pub fn remount_key(&self, panel: &Panel) -> String {
        format!("{}-{}-{}", panel.id.0, self.reload_token, panel.muted)
    }

    /// The address "Open" hands to the system browser, if the panel has one.
    pub fn external_target(&self, id: PanelId) -> Option<&str> {
        self.panel(id)
            .filter(|p| p.has_url())
            .map(|p| p.url.as_str())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
