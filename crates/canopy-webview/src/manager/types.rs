use std::time::Instant;

use canopy_common::{ViewError, ViewId};
use serde::Serialize;

use crate::backend::{ContentView, ViewOptions};

/// Completion of an `execute_script` call.
pub type PendingScript = tokio::sync::oneshot::Receiver<Result<serde_json::Value, ViewError>>;

/// Tracked lifecycle state of one view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub is_loaded: bool,
    pub last_url: Option<String>,
    pub is_visible: bool,
    pub load_start_time: Option<Instant>,
    /// URL of the load in progress, if any.
    pub loading_url: Option<String>,
    /// Last document title reported by the page.
    pub title: Option<String>,
    /// Completed loads so far.
    pub load_count: u64,
}

/// One hosted view. The registry owns the content handle.
pub struct View {
    pub(crate) id: ViewId,
    pub(crate) handle: Box<dyn ContentView>,
    pub(crate) state: ViewState,
    pub(crate) is_standard_app: bool,
    pub(crate) title: Option<String>,
}

impl View {
    pub(crate) fn new(id: ViewId, handle: Box<dyn ContentView>, options: &ViewOptions) -> Self {
        Self {
            id,
            handle,
            state: ViewState::default(),
            is_standard_app: options.is_standard_app,
            title: options.title.clone(),
        }
    }

    pub fn id(&self) -> &ViewId {
        &self.id
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_standard_app(&self) -> bool {
        self.is_standard_app
    }

    /// Configured display title.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn can_go_back(&self) -> bool {
        self.handle.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.handle.can_go_forward()
    }

    pub fn current_url(&self) -> Option<String> {
        self.handle.current_url()
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("View")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("is_standard_app", &self.is_standard_app)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

/// Snapshot returned by `get_stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerStats {
    pub total_views: usize,
    pub standard_app_count: usize,
    pub active_view_id: Option<ViewId>,
    pub initialized: bool,
    pub ids: Vec<ViewId>,
}
