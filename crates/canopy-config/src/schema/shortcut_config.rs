//! Keyboard shortcut configuration types.
//!
//! Named `shortcut_config` to avoid clash with the crate-level `shortcuts` module.

use serde::{Deserialize, Serialize};

/// Keyboard shortcuts intercepted before hosted content sees them.
///
/// Format: "Modifier+Key" where Modifier is one of: Ctrl, Cmd, Alt, Shift.
/// `Ctrl` and `Cmd` are interchangeable: either key satisfies the chord.
/// Multiple modifiers: "Ctrl+Shift+P".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShortcutConfig {
    pub command_palette: String,
    pub toggle_sidebar: String,
    pub toggle_todos: String,
    pub open_settings: String,
    pub refresh: String,
    pub back: String,
    pub forward: String,
    pub switch_app_1: String,
    pub switch_app_2: String,
    pub switch_app_3: String,
    pub switch_app_4: String,
    pub switch_app_5: String,
    pub next_app: String,
    pub previous_app: String,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            command_palette: "Ctrl+Shift+P".into(),
            toggle_sidebar: "Ctrl+Shift+B".into(),
            toggle_todos: "Ctrl+D".into(),
            open_settings: "Ctrl+,".into(),
            refresh: "Ctrl+R".into(),
            back: "Alt+Left".into(),
            forward: "Alt+Right".into(),
            switch_app_1: "Ctrl+1".into(),
            switch_app_2: "Ctrl+2".into(),
            switch_app_3: "Ctrl+3".into(),
            switch_app_4: "Ctrl+4".into(),
            switch_app_5: "Ctrl+5".into(),
            next_app: "Ctrl+Tab".into(),
            previous_app: "Ctrl+Shift+Tab".into(),
        }
    }
}
