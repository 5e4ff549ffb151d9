//! Layout configuration validation (gap and width floors).

use crate::schema::MsbConfig;

use super::helpers::validate_range;

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &MsbConfig) {
    let layout = &config.layout;
    validate_range(errors, "layout.panel_gap", layout.panel_gap, 0, 64);
    validate_range(
        errors,
        "layout.min_even_width",
        layout.min_even_width,
        100,
        2000,
    );
    validate_range(
        errors,
        "layout.min_drag_width",
        layout.min_drag_width,
        100,
        2000,
    );
    validate_range(
        errors,
        "layout.fallback_width",
        layout.fallback_width,
        100,
        4000,
    );
}
