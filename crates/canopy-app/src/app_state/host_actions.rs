//! Shell-level handling of host-scoped shortcut actions.

use canopy_common::{ShortcutAction, ViewId};
use canopy_webview::interceptor::{intercept, Interception};
use canopy_webview::{KeyInput, ViewManager};

use super::core::CanopyApp;

impl CanopyApp {
    /// Key pressed while the shell window itself has focus.
    pub(super) fn handle_shell_key(&mut self, input: KeyInput) {
        let Some(manager) = self.manager.as_mut() else {
            return;
        };
        // The active view handles its own navigation and forwards the rest.
        if let Some(active) = manager.active_view_id().cloned() {
            manager.handle_key_input(&active, &input);
            return;
        }
        if let Interception::Host(action) = intercept(manager.shortcuts(), &input) {
            self.handle_host_action(action);
        }
    }

    pub(super) fn handle_host_action(&mut self, action: ShortcutAction) {
        let Some(manager) = self.manager.as_mut() else {
            return;
        };
        match action {
            ShortcutAction::ToggleSidebar => {
                let open = !manager.sidebar_state();
                manager.set_sidebar_state(open);
                tracing::debug!(open, "Sidebar toggled");
            }
            ShortcutAction::SwitchApp(slot) => {
                let apps = standard_apps(manager);
                if let Some(id) = app_at(&apps, slot) {
                    manager.show_view(id.as_str());
                }
            }
            ShortcutAction::NextApp | ShortcutAction::PreviousApp => {
                let apps = standard_apps(manager);
                let forward = action == ShortcutAction::NextApp;
                if let Some(id) = cycle(&apps, manager.active_view_id(), forward).cloned() {
                    manager.show_view(id.as_str());
                }
            }
            ShortcutAction::CommandPalette
            | ShortcutAction::ToggleTodos
            | ShortcutAction::OpenSettings => {
                tracing::info!(action = %action.name(), "Host UI action requested");
            }
            ShortcutAction::Refresh | ShortcutAction::Back | ShortcutAction::Forward => {
                tracing::debug!(action = %action.name(), "View action reached the host, ignored");
            }
        }
        self.update_window_title();
    }
}

fn standard_apps(manager: &ViewManager) -> Vec<ViewId> {
    manager
        .list_ids()
        .into_iter()
        .filter(|id| {
            manager
                .get(id.as_str())
                .is_some_and(|view| view.is_standard_app())
        })
        .collect()
}

/// 1-based app slot, in creation order.
fn app_at(ids: &[ViewId], slot: u32) -> Option<&ViewId> {
    let index = usize::try_from(slot).ok()?.checked_sub(1)?;
    ids.get(index)
}

/// Neighbour of `active`, wrapping at both ends.
fn cycle<'a>(ids: &'a [ViewId], active: Option<&ViewId>, forward: bool) -> Option<&'a ViewId> {
    let len = ids.len();
    if len == 0 {
        return None;
    }
    let next = match active.and_then(|a| ids.iter().position(|id| id == a)) {
        Some(i) if forward => (i + 1) % len,
        Some(i) => (i + len - 1) % len,
        None => 0,
    };
    ids.get(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<ViewId> {
        names.iter().map(ViewId::new).collect()
    }

    #[test]
    fn slots_are_one_based() {
        let apps = ids(&["mail", "calendar", "teams"]);
        assert_eq!(app_at(&apps, 1), Some(&ViewId::new("mail")));
        assert_eq!(app_at(&apps, 3), Some(&ViewId::new("teams")));
        assert_eq!(app_at(&apps, 0), None);
        assert_eq!(app_at(&apps, 4), None);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let apps = ids(&["mail", "calendar", "teams"]);
        let teams = ViewId::new("teams");
        let mail = ViewId::new("mail");
        assert_eq!(cycle(&apps, Some(&teams), true), Some(&mail));
        assert_eq!(cycle(&apps, Some(&mail), false), Some(&teams));
        assert_eq!(
            cycle(&apps, Some(&mail), true),
            Some(&ViewId::new("calendar"))
        );
    }

    #[test]
    fn cycling_without_active_starts_at_first() {
        let apps = ids(&["mail", "calendar"]);
        assert_eq!(cycle(&apps, None, false), Some(&ViewId::new("mail")));
        assert_eq!(cycle(&[], None, true), None);
    }
}
