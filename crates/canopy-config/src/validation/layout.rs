//! Window, layout and timing validation.

use crate::schema::ShellConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(errors, "window.width", config.window.width, 400, 10000);
    validate_range(errors, "window.height", config.window.height, 300, 10000);
}

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(
        errors,
        "layout.header_height",
        config.layout.header_height,
        0,
        200,
    );
    validate_range(
        errors,
        "layout.sidebar_width",
        config.layout.sidebar_width,
        100,
        1200,
    );
}

pub(crate) fn validate_timing(errors: &mut Vec<String>, config: &ShellConfig) {
    validate_range(
        errors,
        "timing.resize_debounce_ms",
        config.timing.resize_debounce_ms,
        1,
        1000,
    );
    validate_range(
        errors,
        "timing.startup_grace_ms",
        config.timing.startup_grace_ms,
        0,
        60000,
    );
    validate_range(
        errors,
        "timing.load_timeout_ms",
        config.timing.load_timeout_ms,
        0,
        600000,
    );
}
