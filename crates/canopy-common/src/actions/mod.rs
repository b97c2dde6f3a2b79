use serde::{Deserialize, Serialize};

mod action_enum;
mod dispatch;

pub use action_enum::*;

/// Where a shortcut action is executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionScope {
    /// Runs against the view that received the key event.
    View,
    /// Forwarded to the host UI as a named message.
    Host,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_actions_are_view_scoped() {
        assert_eq!(ShortcutAction::Refresh.scope(), ActionScope::View);
        assert_eq!(ShortcutAction::Back.scope(), ActionScope::View);
        assert_eq!(ShortcutAction::Forward.scope(), ActionScope::View);
    }

    #[test]
    fn host_actions_are_forwarded() {
        assert_eq!(ShortcutAction::CommandPalette.scope(), ActionScope::Host);
        assert_eq!(ShortcutAction::SwitchApp(2).scope(), ActionScope::Host);
        assert_eq!(ShortcutAction::ToggleSidebar.scope(), ActionScope::Host);
    }

    #[test]
    fn wire_names_parse_back() {
        let actions = [
            ShortcutAction::Refresh,
            ShortcutAction::CommandPalette,
            ShortcutAction::ToggleTodos,
            ShortcutAction::SwitchApp(7),
            ShortcutAction::PreviousApp,
        ];
        for action in actions {
            assert_eq!(ShortcutAction::from_name(&action.name()), Some(action));
        }
    }

    #[test]
    fn switch_app_name_carries_index() {
        assert_eq!(ShortcutAction::SwitchApp(3).name(), "switch-app-3");
        assert_eq!(ShortcutAction::from_name("switch-app-x"), None);
        assert_eq!(ShortcutAction::from_name("launch-rockets"), None);
    }

    #[test]
    fn switch_app_labels() {
        assert_eq!(ShortcutAction::SwitchApp(1).label(), "Switch to App 1");
        assert_eq!(ShortcutAction::SwitchApp(9).label(), "Switch App");
    }
}
