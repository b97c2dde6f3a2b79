//! Shortcut table: maps configured chords to [`ShortcutAction`]s.
//!
//! [`ShortcutAction`]: canopy_common::ShortcutAction

mod registry;

pub use registry::{ShortcutEntry, ShortcutTable};

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_common::{KeyCombo, ShortcutAction};
    use canopy_config::schema::ShortcutConfig;

    #[test]
    fn uppercase_input_matches_palette_chord() {
        let table = ShortcutTable::from_config(&ShortcutConfig::default());
        let combo = KeyCombo::from_input(true, false, false, true, "P");
        assert_eq!(table.lookup(&combo), Some(ShortcutAction::CommandPalette));
    }

    #[test]
    fn meta_input_matches_ctrl_binding() {
        let table = ShortcutTable::from_config(&ShortcutConfig::default());
        let combo = KeyCombo::from_input(false, true, false, false, "r");
        assert_eq!(table.lookup(&combo), Some(ShortcutAction::Refresh));
    }

    #[test]
    fn arrow_input_matches_back_binding() {
        let table = ShortcutTable::from_config(&ShortcutConfig::default());
        let combo = KeyCombo::from_input(false, false, true, false, "ArrowLeft");
        assert_eq!(table.lookup(&combo), Some(ShortcutAction::Back));
    }

    #[test]
    fn extra_modifiers_do_not_match() {
        let table = ShortcutTable::from_config(&ShortcutConfig::default());
        let combo = KeyCombo::from_input(true, false, true, false, "r");
        assert_eq!(table.lookup(&combo), None);
    }

    #[test]
    fn table_from_default_config() {
        let table = ShortcutTable::from_config(&ShortcutConfig::default());
        assert_eq!(table.len(), 14);
    }

    #[test]
    fn disabled_and_invalid_bindings_are_skipped() {
        let config = ShortcutConfig {
            toggle_todos: String::new(),
            open_settings: "Hyper+,".into(),
            ..Default::default()
        };
        let table = ShortcutTable::from_config(&config);
        assert_eq!(table.len(), 12);
        assert!(table.display_for(ShortcutAction::ToggleTodos).is_none());
    }

    #[test]
    fn colliding_chord_keeps_first_action() {
        let config = ShortcutConfig {
            toggle_todos: "Shift+Cmd+P".into(),
            ..Default::default()
        };
        let table = ShortcutTable::from_config(&config);
        assert_eq!(table.len(), 13);
        let combo = KeyCombo::from_input(true, false, false, true, "p");
        assert_eq!(table.lookup(&combo), Some(ShortcutAction::CommandPalette));
    }

    #[test]
    fn display_for_action() {
        let table = ShortcutTable::from_config(&ShortcutConfig::default());
        let display = table.display_for(ShortcutAction::Refresh).unwrap();
        if !cfg!(target_os = "macos") {
            assert_eq!(display, "Ctrl+R");
        }
    }

    #[test]
    fn help_rows_follow_config_order() {
        let config = ShortcutConfig {
            switch_app_5: String::new(),
            ..Default::default()
        };
        let table = ShortcutTable::from_config(&config);
        let rows = table.help_rows();
        assert_eq!(rows.len(), 13);
        assert_eq!(rows[0].0, "Command Palette");
        assert!(!rows.iter().any(|(label, _)| *label == "Switch to App 5"));
        assert_eq!(rows.last().map(|r| r.0), Some("Previous App"));
    }

    #[test]
    fn entries_are_sorted_and_flattened() {
        let table = ShortcutTable::from_config(&ShortcutConfig::default());
        let entries = table.entries();
        assert_eq!(entries.len(), 14);
        assert_eq!(entries[0].action, "back");

        let palette = entries
            .iter()
            .find(|e| e.action == "command-palette")
            .unwrap();
        assert_eq!(palette.key, "p");
        assert!(palette.ctrl_or_meta && palette.shift && !palette.alt);
    }

    #[test]
    fn entries_serialize_camel_case() {
        let entry = ShortcutEntry {
            key: "r".into(),
            ctrl_or_meta: true,
            alt: false,
            shift: false,
            action: "refresh".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["ctrlOrMeta"], true);
        assert_eq!(json["action"], "refresh");
    }
}
