//! Reactions to events emitted by the view manager.

use canopy_common::ShortcutAction;
use canopy_webview::ViewEvent;

use super::core::CanopyApp;

impl CanopyApp {
    /// Drain and handle everything the manager emitted since the last poll.
    pub(super) fn drain_view_events(&mut self) {
        let events: Vec<ViewEvent> = match &self.view_events {
            Some(rx) => rx.try_iter().collect(),
            None => return,
        };
        for event in events {
            self.handle_view_event(event);
        }
    }

    fn handle_view_event(&mut self, event: ViewEvent) {
        match event {
            ViewEvent::Activated { .. } | ViewEvent::TitleChanged { .. } => {
                self.update_window_title();
            }
            ViewEvent::ShortcutForwarded { action, view_id } => {
                match ShortcutAction::from_name(&action) {
                    Some(action) => {
                        tracing::debug!(view_id = %view_id, action = %action.name(), "Shortcut from view");
                        self.handle_host_action(action);
                    }
                    None => tracing::warn!(action = %action, "Unknown forwarded shortcut"),
                }
            }
            ViewEvent::BadgeUpdate { has_notification } => {
                self.has_badge = has_notification;
                self.update_window_title();
            }
            ViewEvent::Error { id, error } => {
                tracing::warn!(
                    view_id = %id,
                    code = error.code,
                    url = %error.url,
                    "Load failed: {}",
                    error.description
                );
            }
            ViewEvent::NewWindowRequested { id, url, .. } => {
                tracing::info!(view_id = %id, url = %url, "Popup suppressed");
            }
            ViewEvent::ContextMenu {
                id, selection_text, ..
            } => {
                tracing::debug!(view_id = %id, selection_len = selection_text.len(), "Context menu requested");
            }
            // Diagnostics were already logged at their source.
            other => tracing::trace!(event = other.name(), "View event"),
        }
    }
}
