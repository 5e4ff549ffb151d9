use msb_common::PanelId;

use crate::split::SplitCount;

#[derive(Debug, Clone, PartialEq)]
pub enum LayoutCommand {
    StartSplit(SplitCount),
    Close(PanelId),
    SetInput(PanelId, String),
    /// Carries an address that was already normalized.
    CommitAddress(PanelId, String),
    ToggleMute(PanelId),
    AdjustZoom(PanelId, f64),
    ResetZoom(PanelId),
    /// Total row width in pixels.
    ApplyEvenWidths(u32),
    BeginResize {
        panel: PanelId,
        pointer_x: f64,
        current_width: Option<f64>,
    },
    DragMove(f64),
    EndResize,
}
