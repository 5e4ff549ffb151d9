//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# MSB Configuration
# Only override what you want to change -- missing fields use defaults.

[layout]
# panel_gap = 18         # 0-64, pixels between panels
# min_even_width = 280   # 100-2000, floor for evenly shared widths
# min_drag_width = 260   # 100-2000, floor for dragged widths
# fallback_width = 320   # 100-4000, drag start width for unmeasured panels

[window]
# title = "MSB | Multi-Sites Browsing"
# width = 1280           # 640-7680
# height = 800           # 480-4320

[startup]
# split = 2              # 2-4, omit to start on the landing screen
# urls = ["example.com", "https://www.youtube.com/embed/dQw4w9WgXcQ"]

[webview]
# devtools = false
# user_agent = "MSB/0.1"
# assets_dir = "/path/to/shell"

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
