//! Even-width distribution and command dispatch for Session.

use crate::commands::LayoutCommand;

use super::Session;

impl Session {
    /// Execute a layout command. Returns `true` if state changed.
    pub fn execute(&mut self, cmd: LayoutCommand) -> bool {
        match cmd {
            LayoutCommand::StartSplit(count) => {
                self.start_split(count);
                true
            }
            LayoutCommand::Close(id) => self.close_panel(id),
            LayoutCommand::SetInput(id, text) => self.set_input(id, text),
            LayoutCommand::CommitAddress(id, url) => self.commit_address(id, &url),
            LayoutCommand::ToggleMute(id) => self.toggle_mute(id),
            LayoutCommand::AdjustZoom(id, delta) => self.adjust_zoom(id, delta),
            LayoutCommand::ResetZoom(id) => self.reset_zoom(id),
            LayoutCommand::ApplyEvenWidths(total) => self.apply_even_widths(total),
            LayoutCommand::BeginResize {
                panel,
                pointer_x,
                current_width,
            } => self.begin_resize(panel, pointer_x, current_width),
            LayoutCommand::DragMove(x) => self.drag_move(x),
            LayoutCommand::EndResize => self.end_resize(),
        }
    }

    /// Give every panel that has no width yet an even share of `total`.
    ///
    /// Widths already assigned, evenly or by a drag, are left alone.
    /// Returns `true` if any panel got a width.
    pub fn apply_even_widths(&mut self, total: u32) -> bool {
        let Some(count) = self.pane_count else {
            return false;
        };
        if total == 0 {
            return false;
        }
        let width = self.metrics.even_width(total, count as u32);
        let mut changed = false;
        for panel in self.panels.iter_mut().filter(|p| p.width.is_none()) {
            panel.width = Some(width);
            changed = true;
        }
        changed
    }
}
