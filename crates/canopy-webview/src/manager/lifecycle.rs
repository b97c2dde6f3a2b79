use std::sync::Arc;

use canopy_common::{Diagnostic, DiagnosticLevel, ViewError, ViewId};
use canopy_config::schema::StandardAppConfig;
use serde_json::{json, Value};
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use super::types::{ManagerStats, PendingScript, View};
use super::ViewManager;
use crate::backend::{ScriptCallback, SignalSink, ViewOptions, ViewRequest};
use crate::events::ViewEvent;

impl ViewManager {
    /// Create a view and start loading `url`. The view starts hidden.
    ///
    /// An id that is already live yields [`ViewError::AlreadyExists`] and
    /// leaves the existing view untouched.
    pub fn create_view(
        &mut self,
        id: &str,
        url: &str,
        options: ViewOptions,
    ) -> Result<ViewId, ViewError> {
        let view_id = ViewId::new(id);
        if view_id.is_empty() {
            return Err(ViewError::InvalidId(id.to_string()));
        }
        if self.registry.contains(&view_id) {
            debug!(view_id = %view_id, "create skipped, view already exists");
            return Err(ViewError::AlreadyExists(view_id));
        }

        let bounds = self.current_bounds();
        let request = ViewRequest {
            id: &view_id,
            url,
            options: &options,
            bounds,
            signals: SignalSink::new(view_id.clone(), Arc::clone(&self.signals)),
            shortcuts: &self.shortcuts,
        };

        let handle = match self.engine.create_view(request) {
            Ok(handle) => handle,
            Err(e) => {
                self.diagnose(Diagnostic::new(
                    "view-create-failed",
                    DiagnosticLevel::Error,
                    e.to_string(),
                    json!({ "viewId": view_id, "url": url }),
                ));
                return Err(e);
            }
        };

        self.registry
            .insert(View::new(view_id.clone(), handle, &options));
        info!(view_id = %view_id, url, "view created");
        Ok(view_id)
    }

    /// Tear down a view. Returns `false` if no such view exists.
    pub fn destroy_view(&mut self, id: &str) -> bool {
        let view_id = ViewId::new(id);
        let Some(view) = self.registry.get(&view_id) else {
            debug!(view_id = %view_id, "destroy ignored, unknown view");
            return false;
        };

        if self.active.as_ref() == Some(&view_id) {
            if let Err(reason) = self.host.remove_child_view(&view_id, view.handle.as_ref()) {
                warn!(view_id = %view_id, %reason, "detach during destroy failed");
            }
            self.active = None;
            self.emit(ViewEvent::Activated { id: None });
        }
        if self.pending_focus.as_ref() == Some(&view_id) {
            self.pending_focus = None;
        }

        self.stop_polling(&view_id);
        self.credentials.forget(&view_id);
        // Dropping the handle releases the content engine resources.
        drop(self.registry.remove(&view_id));

        info!(view_id = %view_id, "view destroyed");
        self.emit(ViewEvent::Closed { id: view_id });
        true
    }

    pub fn navigate_view(&mut self, id: &str, url: &str) -> Result<(), ViewError> {
        let view_id = ViewId::new(id);
        let view = self
            .registry
            .get_mut(&view_id)
            .ok_or_else(|| ViewError::NotFound(view_id.clone()))?;
        debug!(view_id = %view_id, url, "navigating");
        view.handle.load_url(url)
    }

    pub fn reload_view(&mut self, id: &str) -> Result<(), ViewError> {
        let view_id = ViewId::new(id);
        let view = self
            .registry
            .get_mut(&view_id)
            .ok_or_else(|| ViewError::NotFound(view_id.clone()))?;
        view.handle.reload()
    }

    /// Run `code` in a view. The receiver resolves with the script's result,
    /// parsed as JSON when possible.
    pub fn execute_script(&mut self, id: &str, code: &str) -> Result<PendingScript, ViewError> {
        let view_id = ViewId::new(id);
        let view = self
            .registry
            .get(&view_id)
            .ok_or_else(|| ViewError::NotFound(view_id.clone()))?;

        let (tx, rx) = oneshot::channel();
        let callback: ScriptCallback = Box::new(move |result| {
            let value = result
                .map(|raw| serde_json::from_str(&raw).unwrap_or_else(|_| Value::String(raw)))
                .map_err(ViewError::Script);
            // Caller may have stopped waiting.
            let _ = tx.send(value);
        });
        view.handle.evaluate_script(code, Some(callback))?;
        Ok(rx)
    }

    /// Create one view per visible configured app. Returns how many were
    /// created.
    pub fn initialize_standard_apps(&mut self, apps: &[StandardAppConfig]) -> usize {
        let mut created = 0;
        for app in apps.iter().filter(|app| app.visible) {
            let options = ViewOptions {
                title: Some(app.title.clone()),
                is_standard_app: true,
                user_agent: app.user_agent.clone(),
            };
            match self.create_view(&app.id, &app.url, options) {
                Ok(_) => created += 1,
                Err(ViewError::AlreadyExists(id)) => {
                    debug!(view_id = %id, "standard app already running");
                }
                Err(e) => warn!(app = %app.id, error = %e, "failed to create standard app"),
            }
        }
        self.initialized = true;
        info!(created, "standard apps initialized");
        created
    }

    pub fn get(&self, id: &str) -> Option<&View> {
        self.registry.get(&ViewId::new(id))
    }

    pub fn get_active(&self) -> Option<&View> {
        self.active.as_ref().and_then(|id| self.registry.get(id))
    }

    pub fn active_view_id(&self) -> Option<&ViewId> {
        self.active.as_ref()
    }

    /// Live ids in creation order.
    pub fn list_ids(&self) -> Vec<ViewId> {
        self.registry.ids()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn get_stats(&self) -> ManagerStats {
        ManagerStats {
            total_views: self.registry.len(),
            standard_app_count: self.registry.standard_app_count(),
            active_view_id: self.active.clone(),
            initialized: self.initialized,
            ids: self.registry.ids(),
        }
    }

    /// Destroy every view and stop background work.
    pub fn shutdown(&mut self) {
        let ids = self.registry.ids();
        info!(views = ids.len(), "shutting down view manager");
        for id in ids {
            self.destroy_view(id.as_str());
        }
        self.poller.cancel_all();
        self.credentials.clear();
        self.resize.cancel();
        self.pending_focus = None;
        self.initialized = false;
    }
}
