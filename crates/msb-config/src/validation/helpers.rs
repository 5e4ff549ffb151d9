//! Shared range-validation helpers used by all domain validators.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Like [`validate_range`], but an absent value is always fine.
pub(crate) fn validate_optional_range(
    errors: &mut Vec<String>,
    name: &str,
    value: Option<u32>,
    min: u32,
    max: u32,
) {
    if let Some(value) = value {
        validate_range(errors, name, value, min, max);
    }
}
