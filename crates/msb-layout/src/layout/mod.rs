mod calculation;
mod types;

pub use calculation::compute_even_widths;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_panels_in_a_thousand_pixels() {
        assert_eq!(compute_even_widths(1000, 18, 3), 321);
    }

    #[test]
    fn two_panels_share_evenly() {
        // (1280 - 18) / 2 = 631
        assert_eq!(compute_even_widths(1280, 18, 2), 631);
    }

    #[test]
    fn narrow_viewport_hits_floor() {
        assert_eq!(compute_even_widths(800, 18, 4), MIN_EVEN_WIDTH);
        assert_eq!(compute_even_widths(0, 18, 2), MIN_EVEN_WIDTH);
    }

    #[test]
    fn gaps_wider_than_total_saturate() {
        assert_eq!(compute_even_widths(10, 18, 4), MIN_EVEN_WIDTH);
    }

    #[test]
    fn zero_count_yields_floor() {
        assert_eq!(compute_even_widths(1000, 18, 0), MIN_EVEN_WIDTH);
    }

    #[test]
    fn metrics_even_width_uses_own_gap_and_floor() {
        let metrics = LayoutMetrics {
            gap: 0,
            min_even_width: 100,
            ..Default::default()
        };
        assert_eq!(metrics.even_width(900, 3), 300);
        assert_eq!(metrics.even_width(200, 3), 100);
    }

    #[test]
    fn default_metrics() {
        let metrics = LayoutMetrics::default();
        assert_eq!(metrics.gap, 18);
        assert_eq!(metrics.min_even_width, 280);
        assert_eq!(metrics.min_drag_width, 260);
        assert!((metrics.fallback_width - 320.0).abs() < f64::EPSILON);
    }

    #[test]
    fn drag_width_follows_pointer() {
        let metrics = LayoutMetrics::default();
        assert_eq!(metrics.drag_width(400.0, 100.0, 150.0), 450);
        assert_eq!(metrics.drag_width(400.0, 100.0, 60.0), 360);
    }

    #[test]
    fn drag_width_rounds() {
        let metrics = LayoutMetrics::default();
        assert_eq!(metrics.drag_width(400.0, 100.0, 100.6), 401);
        assert_eq!(metrics.drag_width(400.0, 100.0, 100.4), 400);
    }

    #[test]
    fn drag_width_never_below_floor() {
        let metrics = LayoutMetrics::default();
        assert_eq!(metrics.drag_width(300.0, 500.0, 0.0), MIN_DRAG_WIDTH);
        assert_eq!(metrics.drag_width(300.0, 0.0, f64::NAN), MIN_DRAG_WIDTH);
    }
}
