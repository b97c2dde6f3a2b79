use std::time::Instant;

use canopy_common::{Diagnostic, DiagnosticLevel, ShortcutAction, ViewId};
use serde_json::json;
use tracing::{debug, trace};

use super::ViewManager;
use crate::backend::{ContentSignal, KeyInput};
use crate::credentials::{InjectionStep, CREDENTIALS_MESSAGE};
use crate::events::{LoadError, ViewEvent};
use crate::interceptor::{intercept, Interception};
use crate::notifications::PROBE_SCRIPT;

/// Engine error code for a load cancelled by a newer navigation.
const LOAD_ABORTED: i32 = -3;

/// Error code reported for a load the watchdog gave up on.
pub(crate) const LOAD_TIMED_OUT: i32 = -7;

impl ViewManager {
    /// Process queued content signals now.
    pub fn pump(&mut self) -> usize {
        self.pump_at(Instant::now())
    }

    pub(crate) fn pump_at(&mut self, now: Instant) -> usize {
        let signals = match self.signals.lock() {
            Ok(mut queue) => std::mem::take(&mut *queue),
            Err(_) => return 0,
        };
        let count = signals.len();
        for (id, signal) in signals {
            self.handle_signal(&id, signal, now);
        }
        count
    }

    fn handle_signal(&mut self, id: &ViewId, signal: ContentSignal, now: Instant) {
        if !self.registry.contains(id) {
            trace!(view_id = %id, "signal for destroyed view dropped");
            return;
        }

        match signal {
            ContentSignal::LoadStarted { url } => {
                debug!(view_id = %id, url = %url, "load started");
                if let Some(view) = self.registry.get_mut(id) {
                    view.state.load_start_time = Some(now);
                    view.state.loading_url = Some(url);
                }
                self.emit(ViewEvent::Loading {
                    id: id.clone(),
                    loading: true,
                });
            }
            ContentSignal::LoadFinished { url } => self.on_load_finished(id, url, now),
            ContentSignal::LoadFailed {
                code,
                description,
                url,
            } => self.on_load_failed(id, LoadError { code, description, url }, now),
            ContentSignal::Navigated { url } => {
                if let Some(view) = self.registry.get_mut(id) {
                    view.state.last_url = Some(url.clone());
                }
                self.emit(ViewEvent::Navigated { id: id.clone(), url });
            }
            ContentSignal::TitleChanged { title } => {
                if let Some(view) = self.registry.get_mut(id) {
                    view.state.title = Some(title.clone());
                }
                self.emit(ViewEvent::TitleChanged {
                    id: id.clone(),
                    title,
                });
            }
            ContentSignal::NewWindowRequested { url, title } => {
                self.emit(ViewEvent::NewWindowRequested {
                    id: id.clone(),
                    url,
                    title,
                });
            }
            ContentSignal::ContextMenu {
                selection_text,
                x,
                y,
            } => {
                self.emit(ViewEvent::ContextMenu {
                    id: id.clone(),
                    selection_text,
                    x,
                    y,
                });
            }
            ContentSignal::KeyInput(input) => {
                self.handle_key_input(id, &input);
            }
        }
    }

    fn on_load_finished(&mut self, id: &ViewId, url: String, now: Instant) {
        let Some(view) = self.registry.get_mut(id) else {
            return;
        };
        view.state.is_loaded = true;
        view.state.last_url = Some(url.clone());
        view.state.load_count += 1;
        view.state.loading_url = None;
        let load_seq = view.state.load_count;
        if let Some(started) = view.state.load_start_time.take() {
            debug!(
                view_id = %id,
                elapsed_ms = now.saturating_duration_since(started).as_millis() as u64,
                "load finished"
            );
        }

        self.emit(ViewEvent::Loading {
            id: id.clone(),
            loading: false,
        });
        self.emit(ViewEvent::Loaded {
            id: id.clone(),
            url: url.clone(),
        });

        if let Some(diagnostic) = self.credentials.on_load_finished(id, &url, load_seq) {
            self.diagnose(diagnostic);
        }
        if !self.poller.on_load_finished(id, &url, now) && self.poller.is_polling(id) {
            debug!(view_id = %id, url = %url, "left notification page, polling stopped");
            self.stop_polling(id);
        }
    }

    fn on_load_failed(&mut self, id: &ViewId, error: LoadError, now: Instant) {
        if error.code == LOAD_ABORTED {
            trace!(view_id = %id, url = %error.url, "load aborted by newer navigation");
            return;
        }
        if let Some(view) = self.registry.get_mut(id) {
            view.state.load_start_time = None;
            view.state.loading_url = None;
        }
        self.emit(ViewEvent::Loading {
            id: id.clone(),
            loading: false,
        });

        if now.saturating_duration_since(self.started_at) < self.startup_grace {
            self.diagnose(Diagnostic::new(
                "load-error-suppressed",
                DiagnosticLevel::Warn,
                format!("load failed during startup: {}", error.description),
                json!({ "viewId": id, "code": error.code, "url": error.url }),
            ));
            return;
        }
        self.emit(ViewEvent::Error {
            id: id.clone(),
            error,
        });
    }

    /// Route one key press from a view. Returns `true` if it was a shortcut
    /// and must not reach the page.
    pub fn handle_key_input(&mut self, id: &ViewId, input: &KeyInput) -> bool {
        match intercept(&self.shortcuts, input) {
            Interception::Pass => false,
            Interception::View(action) => {
                self.run_view_action(id, action);
                true
            }
            Interception::Host(action) => {
                self.forward_shortcut(id, action);
                true
            }
        }
    }

    fn run_view_action(&mut self, id: &ViewId, action: ShortcutAction) {
        let Some(view) = self.registry.get_mut(id) else {
            return;
        };
        let result = match action {
            ShortcutAction::Refresh => view.handle.reload(),
            ShortcutAction::Back if view.handle.can_go_back() => view.handle.go_back(),
            ShortcutAction::Forward if view.handle.can_go_forward() => view.handle.go_forward(),
            _ => {
                debug!(view_id = %id, action = %action.name(), "nothing to do");
                Ok(())
            }
        };
        if let Err(e) = result {
            self.diagnose(Diagnostic::new(
                "view-action-failed",
                DiagnosticLevel::Warn,
                e.to_string(),
                json!({ "viewId": id, "action": action.name() }),
            ));
        }
    }

    fn forward_shortcut(&mut self, id: &ViewId, action: ShortcutAction) {
        let event = ViewEvent::ShortcutForwarded {
            action: action.name(),
            view_id: id.clone(),
        };
        if self.emit(event) {
            return;
        }
        // The event channel is gone, so this one stays local.
        let diagnostic = Diagnostic::new(
            "shortcut-forward-failed",
            DiagnosticLevel::Warn,
            "host unreachable, shortcut dropped",
            json!({ "viewId": id, "action": action.name() }),
        );
        diagnostic.log();
        self.diagnostics.push(diagnostic);
    }

    pub(super) fn run_injections(&mut self) {
        for step in self.credentials.drain_ready() {
            let (id, bundle) = match step {
                InjectionStep::Diagnostic(diagnostic) => {
                    self.diagnose(diagnostic);
                    continue;
                }
                InjectionStep::Inject { id, bundle } => (id, bundle),
            };
            let Some(payload) = bundle.to_payload(&id) else {
                continue;
            };
            let Some(view) = self.registry.get(&id) else {
                continue;
            };
            let diagnostic = match view.handle.send_message(CREDENTIALS_MESSAGE, &payload) {
                Ok(()) => Diagnostic::new(
                    "credential-injected",
                    DiagnosticLevel::Info,
                    "credentials pushed to login page",
                    json!({ "viewId": id, "service": bundle.service }),
                ),
                Err(e) => Diagnostic::new(
                    "credential-injection-failed",
                    DiagnosticLevel::Warn,
                    e.to_string(),
                    json!({ "viewId": id, "service": bundle.service }),
                ),
            };
            self.diagnose(diagnostic);
        }
    }

    pub(super) fn run_probes(&mut self, now: Instant) {
        for (id, callback) in self.poller.take_due(now) {
            match self.registry.get(&id) {
                Some(view) => {
                    // A failed probe waits for the next period.
                    if let Err(e) = view.handle.evaluate_script(PROBE_SCRIPT, Some(callback)) {
                        trace!(view_id = %id, error = %e, "notification probe skipped");
                    }
                }
                None => self.stop_polling(&id),
            }
        }
        if let Some(has_notification) = self.poller.drain_results() {
            self.emit(ViewEvent::BadgeUpdate { has_notification });
        }
    }

    /// Earliest instant a running load times out.
    pub(super) fn load_deadline(&self) -> Option<Instant> {
        let timeout = self.load_timeout?;
        self.registry
            .ids()
            .iter()
            .filter_map(|id| self.registry.get(id)?.state.load_start_time)
            .map(|started| started + timeout)
            .min()
    }

    /// Report loads that started more than the timeout ago as failed.
    ///
    /// Engines without failure callbacks rely on this to surface
    /// unreachable pages. A late finish still completes normally.
    pub(super) fn expire_stalled_loads(&mut self, now: Instant) {
        let Some(timeout) = self.load_timeout else {
            return;
        };
        let stalled: Vec<(ViewId, String)> = self
            .registry
            .ids()
            .into_iter()
            .filter_map(|id| {
                let view = self.registry.get(&id)?;
                let started = view.state.load_start_time?;
                if now.saturating_duration_since(started) < timeout {
                    return None;
                }
                let url = view
                    .state
                    .loading_url
                    .clone()
                    .or_else(|| view.current_url())
                    .unwrap_or_default();
                Some((id, url))
            })
            .collect();

        for (id, url) in stalled {
            debug!(view_id = %id, url = %url, timeout_ms = timeout.as_millis() as u64, "load timed out");
            let error = LoadError {
                code: LOAD_TIMED_OUT,
                description: "TIMED_OUT".into(),
                url,
            };
            self.on_load_failed(&id, error, now);
        }
    }

    /// Cancel a view's probes, clearing the host badge if it was the last.
    pub(super) fn stop_polling(&mut self, id: &ViewId) {
        if let Some(has_notification) = self.poller.cancel(id) {
            self.emit(ViewEvent::BadgeUpdate { has_notification });
        }
    }
}
