//! Window, startup, and webview validation.

use crate::schema::MsbConfig;

use super::helpers::{validate_optional_range, validate_range};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &MsbConfig) {
    validate_range(errors, "window.width", config.window.width, 640, 7680);
    validate_range(errors, "window.height", config.window.height, 480, 4320);
    if config.window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
}

pub(crate) fn validate_startup(errors: &mut Vec<String>, config: &MsbConfig) {
    validate_optional_range(errors, "startup.split", config.startup.split, 2, 4);
}

pub(crate) fn validate_webview(errors: &mut Vec<String>, config: &MsbConfig) {
    if let Some(ua) = &config.webview.user_agent {
        if ua.trim().is_empty() {
            errors.push("webview.user_agent must not be empty when set".into());
        }
    }
}
