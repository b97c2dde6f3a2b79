use std::time::Instant;

use canopy_common::{Diagnostic, DiagnosticLevel, Rect, ViewId};
use serde_json::json;
use tracing::{debug, trace, warn};

use super::ViewManager;
use crate::bounds::{compute_bounds, LayoutState};
use crate::events::ViewEvent;

impl ViewManager {
    /// Make `id` the single attached view. Returns `false` if the view is
    /// unknown or could not be attached; the previous view then stays
    /// active.
    pub fn show_view(&mut self, id: &str) -> bool {
        let view_id = ViewId::new(id);
        if !self.registry.contains(&view_id) {
            debug!(view_id = %view_id, "show ignored, unknown view");
            return false;
        }

        if self.active.as_ref() == Some(&view_id) {
            self.apply_active_bounds();
            self.pending_focus = Some(view_id);
            return true;
        }

        let bounds = self.current_bounds();
        let Some(view) = self.registry.get_mut(&view_id) else {
            return false;
        };
        if let Err(e) = view.handle.set_bounds(bounds) {
            trace!(view_id = %view_id, error = %e, "pre-attach bounds not applied");
        }

        // Attach the new view before detaching the old one so the content
        // area is never empty.
        if let Err(reason) = self.host.add_child_view(&view_id, view.handle.as_ref()) {
            self.diagnose(Diagnostic::new(
                "view-attach-failed",
                DiagnosticLevel::Error,
                format!("failed to attach view: {reason}"),
                json!({ "viewId": view_id }),
            ));
            return false;
        }
        view.state.is_visible = true;

        if let Some(previous) = self.active.take() {
            self.detach(&previous);
        }

        self.active = Some(view_id.clone());
        self.apply_active_bounds();
        self.pending_focus = Some(view_id.clone());
        debug!(view_id = %view_id, "view activated");
        self.emit(ViewEvent::Activated { id: Some(view_id) });
        true
    }

    /// Detach the active view, leaving the content area empty.
    pub fn hide_view(&mut self) {
        let Some(previous) = self.active.take() else {
            return;
        };
        self.detach(&previous);
        self.pending_focus = None;
        self.emit(ViewEvent::Activated { id: None });
    }

    fn detach(&mut self, id: &ViewId) {
        let Some(view) = self.registry.get_mut(id) else {
            return;
        };
        view.state.is_visible = false;
        if let Err(reason) = self.host.remove_child_view(id, view.handle.as_ref()) {
            self.diagnose(Diagnostic::new(
                "view-detach-failed",
                DiagnosticLevel::Warn,
                format!("failed to detach view: {reason}"),
                json!({ "viewId": id }),
            ));
        }
    }

    pub fn set_sidebar_state(&mut self, open: bool) {
        if self.layout.sidebar_open == open {
            return;
        }
        self.layout.sidebar_open = open;
        self.apply_active_bounds();
    }

    /// Record the overlay state. Overlays float above the content area, so
    /// bounds are recomputed but do not change.
    pub fn set_overlay_state(&mut self, open: bool) {
        self.layout.overlay_open = open;
        self.apply_active_bounds();
    }

    pub fn sidebar_state(&self) -> bool {
        self.layout.sidebar_open
    }

    pub fn overlay_state(&self) -> bool {
        self.layout.overlay_open
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    /// Note a host window resize. Bounds follow on the first `tick` after
    /// the debounce window closes.
    pub fn on_window_resized(&mut self, now: Instant) {
        self.resize.schedule(now);
    }

    /// Bounds the active view occupies under the current layout.
    pub fn current_bounds(&self) -> Rect {
        compute_bounds(self.host.content_size(), &self.layout)
    }

    pub(crate) fn apply_active_bounds(&mut self) {
        let bounds = self.current_bounds();
        let Some(id) = self.active.clone() else {
            return;
        };
        let Some(view) = self.registry.get_mut(&id) else {
            return;
        };
        match view.handle.set_bounds(bounds) {
            Ok(()) => trace!(view_id = %id, ?bounds, "bounds applied"),
            Err(e) => warn!(view_id = %id, error = %e, "failed to apply bounds"),
        }
    }

    /// Run deferred work: queued content signals, debounced layout, focus,
    /// credential injection and notification probes.
    pub fn tick(&mut self, now: Instant) {
        self.pump_at(now);
        self.expire_stalled_loads(now);
        if self.resize.fire_due(now) {
            self.apply_active_bounds();
        }
        self.flush_pending_focus();
        self.run_injections();
        self.run_probes(now);
    }

    /// Earliest instant at which `tick` has timed work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.resize.deadline(),
            self.poller.next_deadline(),
            self.load_deadline(),
        ]
            .into_iter()
            .flatten()
            .min()
    }

    fn flush_pending_focus(&mut self) {
        let Some(id) = self.pending_focus.take() else {
            return;
        };
        if self.active.as_ref() != Some(&id) {
            return;
        }
        if let Some(view) = self.registry.get(&id) {
            if let Err(e) = view.handle.focus() {
                debug!(view_id = %id, error = %e, "focus not applied");
            }
        }
    }
}
