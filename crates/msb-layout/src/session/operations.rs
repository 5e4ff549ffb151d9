//! Split, close, update and address operations on the Session.

use msb_common::PanelId;

use crate::panel::{Panel, PanelUpdate};
use crate::split::SplitCount;

use super::Session;

impl Session {
    /// Replace the current layout with `count` fresh panels.
    pub fn start_split(&mut self, count: SplitCount) {
        self.drag = None;
        let first = self.next_id;
        let n = count.get() as u32;
        self.panels = (first..first + n).map(|id| Panel::new(PanelId(id))).collect();
        self.next_id = first + n;
        self.pane_count = Some(count.get());
    }

    /// Remove a panel and reflow the rest.
    ///
    /// Every surviving embed remounts (the reload token is bumped). Closing
    /// the last panel returns to the landing screen. Unknown ids are ignored.
    pub fn close_panel(&mut self, id: PanelId) -> bool {
        let Some(index) = self.panels.iter().position(|p| p.id == id) else {
            return false;
        };
        self.panels.remove(index);

        if self.drag.as_ref().is_some_and(|d| d.panel == id) {
            self.drag = None;
        }

        if self.panels.is_empty() {
            self.pane_count = None;
        } else if self.pane_count != Some(self.panels.len()) {
            self.pane_count = Some(self.panels.len());
        }

        self.reload_token += 1;
        true
    }

    /// Merge `update` into the matching panel. An empty update is a no-op.
    pub fn update_pane(&mut self, id: PanelId, update: PanelUpdate) -> bool {
        if update.is_empty() {
            return false;
        }
        match self.panel_mut(id) {
            Some(panel) => {
                panel.merge(update);
                true
            }
            None => false,
        }
    }

    /// Replace the text in the panel's address field.
    pub fn set_input(&mut self, id: PanelId, text: impl Into<String>) -> bool {
        self.update_pane(id, PanelUpdate::input(text))
    }

    /// The text a submit of this panel should normalize.
    pub fn pending_address(&self, id: PanelId) -> Option<&str> {
        self.panel(id).map(Panel::pending_address)
    }

    /// Confirm an already-normalized address for the panel.
    ///
    /// Both the url and the address field take the normalized value. Returns
    /// `true` only if something changed; an empty address is ignored and the
    /// reload token is never touched.
    pub fn commit_address(&mut self, id: PanelId, normalized: &str) -> bool {
        if normalized.is_empty() {
            return false;
        }
        let Some(panel) = self.panel_mut(id) else {
            return false;
        };
        if panel.url == normalized && panel.input == normalized {
            return false;
        }
        panel.url = normalized.to_string();
        panel.input = normalized.to_string();
        true
    }

    pub fn toggle_mute(&mut self, id: PanelId) -> bool {
        let Some(muted) = self.panel(id).map(|p| p.muted) else {
            return false;
        };
        self.update_pane(id, PanelUpdate::muted(!muted))
    }
}
