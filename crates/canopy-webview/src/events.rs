//! Outbound events delivered to the host UI.

use canopy_common::{Diagnostic, ViewId};
use serde::Serialize;

/// A load failure reported by the content engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadError {
    pub code: i32,
    pub description: String,
    pub url: String,
}

/// Events emitted by the view manager, tagged with `"event"` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum ViewEvent {
    Loading { id: ViewId, loading: bool },
    Loaded { id: ViewId, url: String },
    Navigated { id: ViewId, url: String },
    Error { id: ViewId, error: LoadError },
    /// `None` when no view is active any more.
    Activated { id: Option<ViewId> },
    NewWindowRequested {
        id: ViewId,
        url: String,
        title: Option<String>,
    },
    ContextMenu {
        id: ViewId,
        selection_text: String,
        x: f64,
        y: f64,
    },
    ShortcutForwarded { action: String, view_id: ViewId },
    BadgeUpdate { has_notification: bool },
    DiagnosticLog(Diagnostic),
    TitleChanged { id: ViewId, title: String },
    Closed { id: ViewId },
}

impl ViewEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            ViewEvent::Loading { .. } => "loading",
            ViewEvent::Loaded { .. } => "loaded",
            ViewEvent::Navigated { .. } => "navigated",
            ViewEvent::Error { .. } => "error",
            ViewEvent::Activated { .. } => "activated",
            ViewEvent::NewWindowRequested { .. } => "new-window-requested",
            ViewEvent::ContextMenu { .. } => "context-menu",
            ViewEvent::ShortcutForwarded { .. } => "shortcut-forwarded",
            ViewEvent::BadgeUpdate { .. } => "badge-update",
            ViewEvent::DiagnosticLog(_) => "diagnostic-log",
            ViewEvent::TitleChanged { .. } => "title-changed",
            ViewEvent::Closed { .. } => "closed",
        }
    }
}
