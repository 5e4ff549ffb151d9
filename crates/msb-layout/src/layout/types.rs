//! Layout metrics shared by even-width distribution and drag resizing.

/// Default gap in pixels between panels.
pub const DEFAULT_GAP: u32 = 18;
/// Even widths never go below this.
pub const MIN_EVEN_WIDTH: u32 = 280;
/// A drag never shrinks a panel below this.
pub const MIN_DRAG_WIDTH: u32 = 260;
/// Drag start width when neither an explicit nor a measured width is known.
pub const FALLBACK_WIDTH: f64 = 320.0;

/// Pixel constraints for the panel row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Gap in pixels between panels.
    pub gap: u32,
    pub min_even_width: u32,
    pub min_drag_width: u32,
    pub fallback_width: f64,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            min_even_width: MIN_EVEN_WIDTH,
            min_drag_width: MIN_DRAG_WIDTH,
            fallback_width: FALLBACK_WIDTH,
        }
    }
}
