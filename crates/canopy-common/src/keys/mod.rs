//! Key chords: parsing configured bindings and folding live key events.

mod combo;
mod names;

pub use combo::{KeyCombo, MOD_ALT, MOD_CTRL_OR_META, MOD_SHIFT};
pub use names::canonical_key;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_multi_modifier_binding() {
        let combo = KeyCombo::parse("Ctrl+Shift+P").unwrap();
        assert_eq!(combo.mods, MOD_CTRL_OR_META | MOD_SHIFT);
        assert_eq!(combo.key, "p");
    }

    #[test]
    fn modifier_order_is_irrelevant() {
        assert_eq!(
            KeyCombo::parse("Shift+Ctrl+P").unwrap(),
            KeyCombo::parse("Ctrl+Shift+P").unwrap()
        );
    }

    #[test]
    fn ctrl_cmd_and_super_fold_together() {
        let ctrl = KeyCombo::parse("Ctrl+R").unwrap();
        assert_eq!(ctrl, KeyCombo::parse("Cmd+R").unwrap());
        assert_eq!(ctrl, KeyCombo::parse("Command+r").unwrap());
        assert_eq!(ctrl, KeyCombo::parse("Super+R").unwrap());
        assert_eq!(ctrl, KeyCombo::from_input(false, true, false, false, "r"));
    }

    #[test]
    fn option_is_alt() {
        let combo = KeyCombo::parse("Option+Period").unwrap();
        assert_eq!(combo.mods, MOD_ALT);
        assert_eq!(combo.key, ".");
    }

    #[test]
    fn arrow_aliases_match_input() {
        let configured = KeyCombo::parse("Alt+Left").unwrap();
        assert_eq!(configured, KeyCombo::parse("Alt+ArrowLeft").unwrap());
        assert_eq!(
            configured,
            KeyCombo::from_input(false, false, true, false, "ArrowLeft")
        );
    }

    #[test]
    fn uppercase_input_matches_lowercase_binding() {
        assert_eq!(
            KeyCombo::parse("Ctrl+Shift+P").unwrap(),
            KeyCombo::from_input(true, false, false, true, "P")
        );
    }

    #[test]
    fn duplicate_modifiers_are_accepted() {
        assert_eq!(
            KeyCombo::parse("Ctrl+Ctrl+A").unwrap(),
            KeyCombo::parse("Ctrl+A").unwrap()
        );
    }

    #[test]
    fn single_key_has_no_modifiers() {
        let combo = KeyCombo::parse("F1").unwrap();
        assert_eq!(combo.mods, 0);
        assert_eq!(combo.key, "f1");
    }

    #[test]
    fn unknown_modifier_fails() {
        let err = KeyCombo::parse("Hyper+K").unwrap_err();
        assert!(err.to_string().contains("unrecognized modifier"));
    }

    #[test]
    fn empty_and_trailing_plus_fail() {
        assert!(KeyCombo::parse("").is_err());
        assert!(KeyCombo::parse("   ").is_err());
        assert!(KeyCombo::parse("Ctrl+").is_err());
    }

    #[test]
    fn display_uses_platform_form() {
        let palette = KeyCombo::parse("Shift+Cmd+P").unwrap();
        let back = KeyCombo::parse("Alt+Left").unwrap();
        if cfg!(target_os = "macos") {
            assert_eq!(palette.display(), "\u{2318}\u{21E7}P");
            assert_eq!(back.display(), "\u{2325}\u{2190}");
        } else {
            assert_eq!(palette.display(), "Ctrl+Shift+P");
            assert_eq!(back.display(), "Alt+Left");
        }
    }

    #[test]
    fn accessors_read_bits() {
        let combo = KeyCombo::from_input(true, false, true, false, "x");
        assert!(combo.ctrl_or_meta());
        assert!(combo.alt());
        assert!(!combo.shift());
    }
}
