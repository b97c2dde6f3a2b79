//! Seams between the view manager and the platform.
//!
//! The manager drives three collaborators: a [`ContentEngine`] that builds
//! views, the [`ContentView`] handles it returns, and the [`HostWindow`]
//! whose child-view list decides what is on screen. Engines report back by
//! pushing [`ContentSignal`]s into a [`SignalSink`]; the manager drains the
//! sink on the UI thread.

use std::sync::{Arc, Mutex};

use canopy_common::{Rect, Size, ViewError, ViewId};
use canopy_platform::ShortcutTable;

/// Completion callback for a script evaluation. Receives the JSON-encoded
/// result or an engine error message.
pub type ScriptCallback = Box<dyn FnOnce(Result<String, String>) + Send>;

/// A raw key press observed before hosted content handles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

/// Lifecycle signals reported by a content view.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentSignal {
    LoadStarted { url: String },
    LoadFinished { url: String },
    LoadFailed {
        code: i32,
        description: String,
        url: String,
    },
    Navigated { url: String },
    TitleChanged { title: String },
    NewWindowRequested { url: String, title: Option<String> },
    ContextMenu {
        selection_text: String,
        x: f64,
        y: f64,
    },
    KeyInput(KeyInput),
}

/// Thread-safe queue shared by every view's callbacks.
pub type SignalQueue = Arc<Mutex<Vec<(ViewId, ContentSignal)>>>;

/// Per-view handle onto the shared signal queue.
#[derive(Clone)]
pub struct SignalSink {
    id: ViewId,
    queue: SignalQueue,
}

impl SignalSink {
    pub fn new(id: ViewId, queue: SignalQueue) -> Self {
        Self { id, queue }
    }

    pub fn view_id(&self) -> &ViewId {
        &self.id
    }

    pub fn push(&self, signal: ContentSignal) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push((self.id.clone(), signal));
        }
    }
}

/// Caller-controlled creation options. Security settings are fixed by the
/// engine and cannot be relaxed here.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    /// Display title.
    pub title: Option<String>,
    /// Marks a pre-provisioned app view.
    pub is_standard_app: bool,
    pub user_agent: Option<String>,
}

/// Everything an engine needs to build one view.
pub struct ViewRequest<'a> {
    pub id: &'a ViewId,
    pub url: &'a str,
    pub options: &'a ViewOptions,
    /// Bounds the view would occupy if shown now.
    pub bounds: Rect,
    pub signals: SignalSink,
    pub shortcuts: &'a ShortcutTable,
}

/// An embedded web content surface.
///
/// Navigation calls start asynchronous work and return once it is queued;
/// progress arrives later as [`ContentSignal`]s.
pub trait ContentView {
    fn load_url(&mut self, url: &str) -> Result<(), ViewError>;
    fn reload(&mut self) -> Result<(), ViewError>;
    fn evaluate_script(&self, script: &str, callback: Option<ScriptCallback>)
        -> Result<(), ViewError>;
    /// One-way message to the page's isolated script context.
    fn send_message(&self, kind: &str, payload: &serde_json::Value) -> Result<(), ViewError>;
    fn set_bounds(&self, bounds: Rect) -> Result<(), ViewError>;
    fn set_visible(&self, visible: bool) -> Result<(), ViewError>;
    fn focus(&self) -> Result<(), ViewError>;
    fn can_go_back(&self) -> bool;
    fn go_back(&mut self) -> Result<(), ViewError>;
    fn can_go_forward(&self) -> bool;
    fn go_forward(&mut self) -> Result<(), ViewError>;
    fn current_url(&self) -> Option<String>;
}

/// The shell window that hosts views.
pub trait HostWindow {
    /// Logical size of the content area.
    fn content_size(&self) -> Size;
    fn add_child_view(&mut self, id: &ViewId, view: &dyn ContentView) -> Result<(), String>;
    fn remove_child_view(&mut self, id: &ViewId, view: &dyn ContentView) -> Result<(), String>;
}

/// Factory for content views.
pub trait ContentEngine {
    /// Build a detached view and start loading `request.url`.
    fn create_view(&mut self, request: ViewRequest<'_>) -> Result<Box<dyn ContentView>, ViewError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_tags_signals_with_view_id() {
        let queue: SignalQueue = Arc::new(Mutex::new(Vec::new()));
        let mail = SignalSink::new(ViewId::new("mail"), Arc::clone(&queue));
        let chat = SignalSink::new(ViewId::new("chat"), Arc::clone(&queue));

        mail.push(ContentSignal::LoadStarted {
            url: "https://mail.example.com".into(),
        });
        chat.push(ContentSignal::TitleChanged {
            title: "Chat".into(),
        });

        let drained = std::mem::take(&mut *queue.lock().unwrap());
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].0.as_str(), "mail");
        assert_eq!(drained[1].0.as_str(), "chat");
    }
}
