use std::sync::{Arc, Mutex};

use canopy_common::{Rect, ViewError};
use wry::WebView;

use super::{engine_error, to_wry_rect};
use crate::backend::{ContentView, ScriptCallback};
use crate::history::{NavHistory, Traversal};
use crate::ipc::js_dispatch_message;

/// One child webview. Back/forward run through page script, with the
/// history list fed by committed loads.
pub struct WryView {
    webview: WebView,
    history: Arc<Mutex<NavHistory>>,
    requested_url: String,
}

impl WryView {
    pub(super) fn new(webview: WebView, history: Arc<Mutex<NavHistory>>, url: &str) -> Self {
        Self {
            webview,
            history,
            requested_url: url.to_string(),
        }
    }

    fn run(&self, script: &str) -> Result<(), ViewError> {
        self.webview
            .evaluate_script(script)
            .map_err(|e| ViewError::Script(e.to_string()))
    }

    fn traverse(&mut self, direction: Traversal) -> Result<(), ViewError> {
        if let Ok(mut history) = self.history.lock() {
            history.begin_traversal(direction);
        }
        match direction {
            Traversal::Back => self.run("history.back();"),
            Traversal::Forward => self.run("history.forward();"),
        }
    }
}

impl ContentView for WryView {
    fn load_url(&mut self, url: &str) -> Result<(), ViewError> {
        self.requested_url = url.to_string();
        self.webview.load_url(url).map_err(engine_error)
    }

    fn reload(&mut self) -> Result<(), ViewError> {
        self.run("location.reload();")
    }

    fn evaluate_script(
        &self,
        script: &str,
        callback: Option<ScriptCallback>,
    ) -> Result<(), ViewError> {
        let Some(callback) = callback else {
            return self.run(script);
        };
        // wry takes a reusable callback; ours fires once.
        let slot = Mutex::new(Some(callback));
        self.webview
            .evaluate_script_with_callback(script, move |raw| {
                if let Some(callback) = slot.lock().ok().and_then(|mut s| s.take()) {
                    callback(Ok(raw));
                }
            })
            .map_err(|e| ViewError::Script(e.to_string()))
    }

    fn send_message(&self, kind: &str, payload: &serde_json::Value) -> Result<(), ViewError> {
        self.run(&js_dispatch_message(kind, payload))
    }

    fn set_bounds(&self, bounds: Rect) -> Result<(), ViewError> {
        self.webview
            .set_bounds(to_wry_rect(&bounds))
            .map_err(engine_error)
    }

    fn set_visible(&self, visible: bool) -> Result<(), ViewError> {
        self.webview.set_visible(visible).map_err(engine_error)
    }

    fn focus(&self) -> Result<(), ViewError> {
        self.webview.focus().map_err(engine_error)
    }

    fn can_go_back(&self) -> bool {
        self.history.lock().is_ok_and(|h| h.can_go_back())
    }

    fn go_back(&mut self) -> Result<(), ViewError> {
        self.traverse(Traversal::Back)
    }

    fn can_go_forward(&self) -> bool {
        self.history.lock().is_ok_and(|h| h.can_go_forward())
    }

    fn go_forward(&mut self) -> Result<(), ViewError> {
        self.traverse(Traversal::Forward)
    }

    fn current_url(&self) -> Option<String> {
        let committed = self
            .history
            .lock()
            .ok()
            .and_then(|h| h.current().map(str::to_string));
        committed.or_else(|| Some(self.requested_url.clone()))
    }
}
