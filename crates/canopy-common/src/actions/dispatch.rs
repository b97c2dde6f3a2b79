use super::{ActionScope, ShortcutAction};

impl ShortcutAction {
    /// Where the action executes.
    pub fn scope(&self) -> ActionScope {
        match self {
            ShortcutAction::Refresh | ShortcutAction::Back | ShortcutAction::Forward => {
                ActionScope::View
            }
            _ => ActionScope::Host,
        }
    }

    /// Wire name used when forwarding the action to the host.
    pub fn name(&self) -> String {
        match self {
            ShortcutAction::Refresh => "refresh".into(),
            ShortcutAction::Back => "back".into(),
            ShortcutAction::Forward => "forward".into(),
            ShortcutAction::CommandPalette => "command-palette".into(),
            ShortcutAction::ToggleSidebar => "toggle-sidebar".into(),
            ShortcutAction::ToggleTodos => "toggle-todos".into(),
            ShortcutAction::OpenSettings => "open-settings".into(),
            ShortcutAction::SwitchApp(n) => format!("switch-app-{n}"),
            ShortcutAction::NextApp => "next-app".into(),
            ShortcutAction::PreviousApp => "previous-app".into(),
        }
    }

    /// Parse a wire name back into an action.
    pub fn from_name(name: &str) -> Option<Self> {
        let action = match name {
            "refresh" => ShortcutAction::Refresh,
            "back" => ShortcutAction::Back,
            "forward" => ShortcutAction::Forward,
            "command-palette" => ShortcutAction::CommandPalette,
            "toggle-sidebar" => ShortcutAction::ToggleSidebar,
            "toggle-todos" => ShortcutAction::ToggleTodos,
            "open-settings" => ShortcutAction::OpenSettings,
            "next-app" => ShortcutAction::NextApp,
            "previous-app" => ShortcutAction::PreviousApp,
            other => {
                let n = other.strip_prefix("switch-app-")?.parse().ok()?;
                ShortcutAction::SwitchApp(n)
            }
        };
        Some(action)
    }

    /// Human-readable label for menus and shortcut hints.
    pub fn label(&self) -> &'static str {
        match self {
            ShortcutAction::Refresh => "Reload Page",
            ShortcutAction::Back => "Go Back",
            ShortcutAction::Forward => "Go Forward",
            ShortcutAction::CommandPalette => "Command Palette",
            ShortcutAction::ToggleSidebar => "Toggle Sidebar",
            ShortcutAction::ToggleTodos => "Toggle Todos",
            ShortcutAction::OpenSettings => "Open Settings",
            ShortcutAction::SwitchApp(1) => "Switch to App 1",
            ShortcutAction::SwitchApp(2) => "Switch to App 2",
            ShortcutAction::SwitchApp(3) => "Switch to App 3",
            ShortcutAction::SwitchApp(4) => "Switch to App 4",
            ShortcutAction::SwitchApp(5) => "Switch to App 5",
            ShortcutAction::SwitchApp(_) => "Switch App",
            ShortcutAction::NextApp => "Next App",
            ShortcutAction::PreviousApp => "Previous App",
        }
    }
}
