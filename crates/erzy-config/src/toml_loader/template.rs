//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Erzy Tools Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[gesture]
# drag_threshold = 5.0   # 1-50 px; movement beyond this turns a tap into a drag
# tap_max_ms = 300       # unset: taps are judged by movement only

[launcher]
# size = 56.0            # 24-128
# margin_right = 30.0
# margin_bottom = 30.0

[chat]
# width = 350.0
# height = 500.0
# model = "gemini-2.0-flash"
# max_tokens = 2048      # 1-8192
# temperature = 0.7      # 0.0-2.0
# context_chars = 2000   # 0-20000
# history_limit = 100    # 1-1000

[tools]
# eval_enabled = true

[storage]
# path = "/path/to/storage.json"

[logging]
# level = "info"         # debug, info, warn, error
"##
    .to_string()
}
