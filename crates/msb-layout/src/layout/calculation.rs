//! Width calculation: even distribution and drag deltas.

use super::types::MIN_EVEN_WIDTH;
use super::LayoutMetrics;

/// Width each of `count` panels gets when `total` pixels are shared with
/// `gap` pixels between neighbours. Never below [`MIN_EVEN_WIDTH`].
pub fn compute_even_widths(total: u32, gap: u32, count: u32) -> u32 {
    even_width(total, gap, count, MIN_EVEN_WIDTH)
}

fn even_width(total: u32, gap: u32, count: u32, floor: u32) -> u32 {
    if count == 0 {
        return floor;
    }
    let gaps = gap.saturating_mul(count - 1);
    let available = total.saturating_sub(gaps);
    (available / count).max(floor)
}

impl LayoutMetrics {
    /// Even width for `count` panels in a row `total` pixels wide.
    pub fn even_width(&self, total: u32, count: u32) -> u32 {
        even_width(total, self.gap, count, self.min_even_width)
    }

    /// Width after dragging the resizer from `start_x` to `pointer_x`.
    pub fn drag_width(&self, start_width: f64, start_x: f64, pointer_x: f64) -> u32 {
        let raw = (start_width + (pointer_x - start_x)).round();
        let floor = self.min_drag_width as f64;
        if raw.is_finite() && raw > floor {
            raw.min(u32::MAX as f64) as u32
        } else {
            self.min_drag_width
        }
    }
}
