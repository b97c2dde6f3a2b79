//! Shortcut validation utilities.

use crate::schema::ShortcutConfig;
use canopy_common::{ConfigError, KeyCombo};
use std::collections::HashMap;

/// Returns all shortcuts as `(name, binding)` pairs.
pub fn all_shortcuts(config: &ShortcutConfig) -> Vec<(&str, &str)> {
    vec![
        ("command_palette", &config.command_palette),
        ("toggle_sidebar", &config.toggle_sidebar),
        ("toggle_todos", &config.toggle_todos),
        ("open_settings", &config.open_settings),
        ("refresh", &config.refresh),
        ("back", &config.back),
        ("forward", &config.forward),
        ("switch_app_1", &config.switch_app_1),
        ("switch_app_2", &config.switch_app_2),
        ("switch_app_3", &config.switch_app_3),
        ("switch_app_4", &config.switch_app_4),
        ("switch_app_5", &config.switch_app_5),
        ("next_app", &config.next_app),
        ("previous_app", &config.previous_app),
    ]
}

/// Validate that every shortcut parses and no two map to the same chord.
///
/// Chords are compared the way key presses are matched: modifier order is
/// irrelevant and Ctrl, Cmd and Super count as one modifier. Empty bindings
/// are treated as disabled and never collide.
pub fn validate_no_duplicates(config: &ShortcutConfig) -> Result<(), ConfigError> {
    let mut seen: HashMap<KeyCombo, (&str, &str)> = HashMap::new();

    for (name, binding) in all_shortcuts(config) {
        if binding.trim().is_empty() {
            continue;
        }
        let combo = KeyCombo::parse(binding).map_err(|e| {
            ConfigError::ValidationError(format!("invalid shortcut '{binding}' for '{name}': {e}"))
        })?;
        if let Some((existing_name, existing_binding)) = seen.get(&combo) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate shortcut '{binding}': same chord as '{existing_binding}', \
                 assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(combo, (name, binding));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shortcuts_have_no_duplicates() {
        let config = ShortcutConfig::default();
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn all_shortcuts_returns_14_entries() {
        let config = ShortcutConfig::default();
        assert_eq!(all_shortcuts(&config).len(), 14);
    }

    #[test]
    fn detects_duplicate_shortcuts() {
        let config = ShortcutConfig {
            toggle_todos: "Ctrl+Shift+P".into(),
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("duplicate shortcut"));
        assert!(err.contains("command_palette"));
        assert!(err.contains("toggle_todos"));
    }

    #[test]
    fn duplicates_ignore_case_and_spacing() {
        let config = ShortcutConfig {
            toggle_todos: "ctrl + shift + p".into(),
            ..Default::default()
        };
        assert!(validate_no_duplicates(&config).is_err());
    }

    #[test]
    fn empty_bindings_are_disabled_not_duplicates() {
        let config = ShortcutConfig {
            switch_app_4: String::new(),
            switch_app_5: String::new(),
            ..Default::default()
        };
        assert!(validate_no_duplicates(&config).is_ok());
    }

    #[test]
    fn reordered_modifiers_are_duplicates() {
        let config = ShortcutConfig {
            toggle_todos: "Shift+Ctrl+P".into(),
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("command_palette"));
        assert!(err.contains("toggle_todos"));
    }

    #[test]
    fn cmd_and_ctrl_are_duplicates() {
        let config = ShortcutConfig {
            open_settings: "Cmd+R".into(),
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("'Ctrl+R'"));
        assert!(err.contains("open_settings"));
        assert!(err.contains("refresh"));
    }

    #[test]
    fn key_aliases_are_duplicates() {
        let config = ShortcutConfig {
            forward: "Option+ArrowLeft".into(),
            ..Default::default()
        };
        assert!(validate_no_duplicates(&config).is_err());
    }

    #[test]
    fn unparsable_binding_is_rejected() {
        let config = ShortcutConfig {
            open_settings: "Hyper+,".into(),
            ..Default::default()
        };
        let err = validate_no_duplicates(&config).unwrap_err().to_string();
        assert!(err.contains("invalid shortcut 'Hyper+,'"));
        assert!(err.contains("open_settings"));
    }

    #[test]
    fn distinct_modifier_sets_do_not_collide() {
        let config = ShortcutConfig {
            toggle_todos: "Ctrl+Alt+P".into(),
            ..Default::default()
        };
        assert!(validate_no_duplicates(&config).is_ok());
    }
}
