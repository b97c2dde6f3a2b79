use std::collections::HashMap;

use canopy_common::{KeyCombo, ShortcutAction};
use canopy_config::schema::ShortcutConfig;
use serde::Serialize;

/// One table row in the shape consumed by in-page key listeners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutEntry {
    pub key: String,
    pub ctrl_or_meta: bool,
    pub alt: bool,
    pub shift: bool,
    pub action: String,
}

/// Maps key chords to [`ShortcutAction`]s.
///
/// Built from [`ShortcutConfig`] at startup and shared by every view.
#[derive(Debug, Clone, Default)]
pub struct ShortcutTable {
    bindings: HashMap<KeyCombo, ShortcutAction>,
}

impl ShortcutTable {
    /// Build the table from the config shortcut section.
    ///
    /// Empty strings disable a binding. Invalid strings are logged as
    /// warnings and skipped. A chord bound twice keeps its first action;
    /// config validation rejects such files before they get here.
    pub fn from_config(config: &ShortcutConfig) -> Self {
        let mappings: Vec<(&str, ShortcutAction)> = vec![
            (&config.command_palette, ShortcutAction::CommandPalette),
            (&config.toggle_sidebar, ShortcutAction::ToggleSidebar),
            (&config.toggle_todos, ShortcutAction::ToggleTodos),
            (&config.open_settings, ShortcutAction::OpenSettings),
            (&config.refresh, ShortcutAction::Refresh),
            (&config.back, ShortcutAction::Back),
            (&config.forward, ShortcutAction::Forward),
            (&config.switch_app_1, ShortcutAction::SwitchApp(1)),
            (&config.switch_app_2, ShortcutAction::SwitchApp(2)),
            (&config.switch_app_3, ShortcutAction::SwitchApp(3)),
            (&config.switch_app_4, ShortcutAction::SwitchApp(4)),
            (&config.switch_app_5, ShortcutAction::SwitchApp(5)),
            (&config.next_app, ShortcutAction::NextApp),
            (&config.previous_app, ShortcutAction::PreviousApp),
        ];

        let mut table = Self::default();
        for (binding_str, action) in mappings {
            if binding_str.trim().is_empty() {
                continue;
            }
            let combo = match KeyCombo::parse(binding_str) {
                Ok(combo) => combo,
                Err(e) => {
                    tracing::warn!("invalid shortcut '{binding_str}': {e}");
                    continue;
                }
            };
            if let Some(existing) = table.lookup(&combo) {
                tracing::warn!(
                    "shortcut '{binding_str}' for {} already bound to {}, ignoring",
                    action.name(),
                    existing.name()
                );
                continue;
            }
            table.insert(combo, action);
        }
        table
    }

    /// Add or replace a binding.
    pub fn insert(&mut self, combo: KeyCombo, action: ShortcutAction) {
        self.bindings.insert(combo, action);
    }

    /// Look up the action for a key chord.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<ShortcutAction> {
        self.bindings.get(combo).copied()
    }

    /// All rows, ordered by action name, for in-page key listeners.
    pub fn entries(&self) -> Vec<ShortcutEntry> {
        let mut entries: Vec<ShortcutEntry> = self
            .bindings
            .iter()
            .map(|(combo, action)| ShortcutEntry {
                key: combo.key.clone(),
                ctrl_or_meta: combo.ctrl_or_meta(),
                alt: combo.alt(),
                shift: combo.shift(),
                action: action.name(),
            })
            .collect();
        entries.sort_by(|a, b| a.action.cmp(&b.action).then_with(|| a.key.cmp(&b.key)));
        entries
    }

    /// Display string of the chord bound to `action`.
    pub fn display_for(&self, action: ShortcutAction) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, a)| **a == action)
            .map(|(combo, _)| combo.display())
    }

    /// `(label, chord)` rows for help output, in config order.
    pub fn help_rows(&self) -> Vec<(&'static str, String)> {
        ShortcutAction::ALL
            .iter()
            .filter_map(|action| Some((action.label(), self.display_for(*action)?)))
            .collect()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
