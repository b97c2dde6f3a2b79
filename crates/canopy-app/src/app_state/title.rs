//! Window title management: reflects the active app and unread badge.

use super::core::CanopyApp;

/// Format: "{base} - {app}", prefixed with a dot while the badge is set.
pub(super) fn window_title(base: &str, active: Option<&str>, has_badge: bool) -> String {
    let mut title = String::new();
    if has_badge {
        title.push_str("\u{25CF} ");
    }
    title.push_str(base);
    if let Some(active) = active.filter(|a| !a.is_empty()) {
        title.push_str(" - ");
        title.push_str(active);
    }
    title
}

impl CanopyApp {
    pub(super) fn update_window_title(&self) {
        let Some(ref window) = self.window else {
            return;
        };

        let active = self.manager.as_ref().and_then(|m| m.get_active()).map(|view| {
            view.title()
                .map(str::to_string)
                .unwrap_or_else(|| view.id().to_string())
        });

        window.set_title(&window_title(
            &self.config.window.title,
            active.as_deref(),
            self.has_badge,
        ));
    }
}
