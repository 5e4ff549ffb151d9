//! Interactive drag resizing of a single panel.
//!
//! A gesture is `begin_resize` followed by any number of `drag_move`
//! calls and a final `end_resize`. Only the latest pointer position
//! matters; nothing is queued.

use msb_common::PanelId;

use crate::panel::PanelUpdate;

use super::Session;

/// Active drag state during a resize gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ResizeDrag {
    /// The panel being resized.
    pub panel: PanelId,
    /// Pointer x when the gesture started.
    pub start_x: f64,
    /// Panel width when the gesture started.
    pub start_width: f64,
}

impl Session {
    /// Start resizing `id`. `current_width` is the on-screen width, used when
    /// the panel has no explicit width yet.
    pub fn begin_resize(&mut self, id: PanelId, pointer_x: f64, current_width: Option<f64>) -> bool {
        let fallback = self.metrics.fallback_width;
        let Some(panel) = self.panel(id) else {
            return false;
        };
        let start_width = panel
            .width
            .map(f64::from)
            .or(current_width.filter(|w| w.is_finite() && *w > 0.0))
            .unwrap_or(fallback);

        self.drag = Some(ResizeDrag {
            panel: id,
            start_x: pointer_x,
            start_width,
        });
        true
    }

    /// Apply the latest pointer position to the panel being dragged.
    pub fn drag_move(&mut self, pointer_x: f64) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        let width = self
            .metrics
            .drag_width(drag.start_width, drag.start_x, pointer_x);
        if self.update_pane(drag.panel, PanelUpdate::width(width)) {
            true
        } else {
            self.drag = None;
            false
        }
    }

    /// Stop the gesture. The last width stays.
    pub fn end_resize(&mut self) -> bool {
        self.drag.take().is_some()
    }
}
