use serde::{Deserialize, Serialize};

/// Every action a keyboard shortcut can trigger.
///
/// The interceptor resolves key chords to a `ShortcutAction`; view-scoped
/// actions run against the originating view, everything else is forwarded
/// to the host UI by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShortcutAction {
    // -- View navigation --
    Refresh,
    Back,
    Forward,

    // -- Host UI --
    CommandPalette,
    ToggleSidebar,
    ToggleTodos,
    OpenSettings,

    // -- App switching --
    SwitchApp(u32),
    NextApp,
    PreviousApp,
}

impl ShortcutAction {
    /// Every configurable action, in config-file order.
    pub const ALL: [ShortcutAction; 14] = [
        ShortcutAction::CommandPalette,
        ShortcutAction::ToggleSidebar,
        ShortcutAction::ToggleTodos,
        ShortcutAction::OpenSettings,
        ShortcutAction::Refresh,
        ShortcutAction::Back,
        ShortcutAction::Forward,
        ShortcutAction::SwitchApp(1),
        ShortcutAction::SwitchApp(2),
        ShortcutAction::SwitchApp(3),
        ShortcutAction::SwitchApp(4),
        ShortcutAction::SwitchApp(5),
        ShortcutAction::NextApp,
        ShortcutAction::PreviousApp,
    ];
}
