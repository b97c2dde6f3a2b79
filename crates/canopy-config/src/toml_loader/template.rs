//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Canopy Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Canopy"
# width = 1200           # 400-10000
# height = 800           # 300-10000
# startup_mode = "windowed"   # windowed | maximized

[layout]
# header_height = 48     # 0-200
# sidebar_width = 450    # 100-1200
# sidebar_open = false

[timing]
# resize_debounce_ms = 16     # 1-1000
# startup_grace_ms = 5000     # 0-60000, load errors are quiet during this window
# load_timeout_ms = 30000     # 0-600000, stalled loads are reported as errors; 0 disables

[shortcuts]
# Ctrl and Cmd are interchangeable. Set a binding to "" to disable it.
# command_palette = "Ctrl+Shift+P"
# toggle_sidebar = "Ctrl+Shift+B"
# toggle_todos = "Ctrl+D"
# open_settings = "Ctrl+,"
# refresh = "Ctrl+R"
# back = "Alt+Left"
# forward = "Alt+Right"
# switch_app_1 = "Ctrl+1"
# switch_app_2 = "Ctrl+2"
# switch_app_3 = "Ctrl+3"
# switch_app_4 = "Ctrl+4"
# switch_app_5 = "Ctrl+5"
# next_app = "Ctrl+Tab"
# previous_app = "Ctrl+Shift+Tab"

# Listing any [[apps]] replaces the built-in set.
# [[apps]]
# id = "mail"
# url = "https://outlook.office.com/mail/"
# title = "Mail"
# visible = true
# user_agent = "Mozilla/5.0 ..."

[credentials]
# enabled = true
# Secrets are read from the environment as CANOPY_<SERVICE>_<ACCOUNT>,
# for example CANOPY_MICROSOFT_USERNAME.
# [[credentials.services]]
# name = "microsoft"
# patterns = ["login.microsoftonline.com", "login.live.com"]

[notifications]
# enabled = true
# view_id = "teams"
# url_pattern = "teams.microsoft.com"
# grace_ms = 3000        # 0-60000
# period_ms = 5000       # 250-600000
# markers = ["unread", "badge", "notification"]

[logging]
# level = "info"         # trace | debug | info | warn | error
"##
    .to_string()
}
