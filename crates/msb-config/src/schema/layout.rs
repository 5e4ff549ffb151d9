//! Panel row geometry.

use serde::{Deserialize, Serialize};

/// Spacing and width floors for the split row, in CSS pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between panels (valid range: 0-64).
    pub panel_gap: u32,
    /// Smallest width the even distribution hands out (valid range: 100-2000).
    pub min_even_width: u32,
    /// Smallest width a resize drag can reach (valid range: 100-2000).
    pub min_drag_width: u32,
    /// Drag start width when a panel was never measured (valid range: 100-4000).
    pub fallback_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            panel_gap: 18,
            min_even_width: 280,
            min_drag_width: 260,
            fallback_width: 320,
        }
    }
}
