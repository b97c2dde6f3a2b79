//! View lifecycle and compositing.
//!
//! `ViewManager` owns every hosted view and decides which one is attached
//! to the host window. It lives on the UI thread: content callbacks push
//! signals into a shared queue, background secret fetches and probes report
//! over channels, and [`ViewManager::tick`] folds all of it back in.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use canopy_common::{Diagnostic, DiagnosticQueue, ViewId};
use canopy_config::ShellConfig;
use canopy_platform::{SecretStore, ShortcutTable};
use tokio::runtime::Handle;
use tracing::trace;

use crate::backend::{ContentEngine, HostWindow, SignalQueue};
use crate::bounds::LayoutState;
use crate::credentials::CredentialCoordinator;
use crate::debounce::Debouncer;
use crate::events::ViewEvent;
use crate::notifications::NotificationPoller;

mod bridge;
mod compositor;
mod lifecycle;
mod registry;
mod types;


pub use registry::ViewRegistry;
pub use types::{ManagerStats, PendingScript, View, ViewState};

/// Recent diagnostics kept for `recent_diagnostics`.
const DIAGNOSTIC_HISTORY: usize = 64;

/// Owner of all hosted views.
pub struct ViewManager {
    pub(crate) engine: Box<dyn ContentEngine>,
    pub(crate) host: Box<dyn HostWindow>,
    pub(crate) registry: ViewRegistry,
    pub(crate) active: Option<ViewId>,
    pub(crate) layout: LayoutState,
    pub(crate) shortcuts: ShortcutTable,
    pub(crate) credentials: CredentialCoordinator,
    pub(crate) poller: NotificationPoller,
    pub(crate) resize: Debouncer,
    pub(crate) pending_focus: Option<ViewId>,
    pub(crate) signals: SignalQueue,
    pub(crate) events: Sender<ViewEvent>,
    pub(crate) diagnostics: DiagnosticQueue,
    pub(crate) started_at: Instant,
    pub(crate) startup_grace: Duration,
    /// `None` disables the stalled-load watchdog.
    pub(crate) load_timeout: Option<Duration>,
    pub(crate) initialized: bool,
}

impl ViewManager {
    /// Create a manager and the receiving end of its event stream.
    ///
    /// `runtime` runs secret fetches; without it credential injection only
    /// reports that it is unavailable.
    pub fn new(
        engine: Box<dyn ContentEngine>,
        host: Box<dyn HostWindow>,
        config: &ShellConfig,
        store: Arc<dyn SecretStore>,
        runtime: Option<Handle>,
    ) -> (Self, Receiver<ViewEvent>) {
        let (tx, rx) = mpsc::channel();
        let manager = Self::with_event_sender(engine, host, config, store, runtime, tx);
        (manager, rx)
    }

    /// Like [`new`](Self::new), delivering events to an existing channel.
    pub fn with_event_sender(
        engine: Box<dyn ContentEngine>,
        host: Box<dyn HostWindow>,
        config: &ShellConfig,
        store: Arc<dyn SecretStore>,
        runtime: Option<Handle>,
        events: Sender<ViewEvent>,
    ) -> Self {
        Self {
            engine,
            host,
            registry: ViewRegistry::new(),
            active: None,
            layout: LayoutState::from_config(&config.layout),
            shortcuts: ShortcutTable::from_config(&config.shortcuts),
            credentials: CredentialCoordinator::new(&config.credentials, store, runtime),
            poller: NotificationPoller::new(&config.notifications),
            resize: Debouncer::new(Duration::from_millis(u64::from(
                config.timing.resize_debounce_ms,
            ))),
            pending_focus: None,
            signals: Arc::new(Mutex::new(Vec::new())),
            events,
            diagnostics: DiagnosticQueue::new(DIAGNOSTIC_HISTORY),
            started_at: Instant::now(),
            startup_grace: Duration::from_millis(u64::from(config.timing.startup_grace_ms)),
            load_timeout: match config.timing.load_timeout_ms {
                0 => None,
                ms => Some(Duration::from_millis(u64::from(ms))),
            },
            initialized: false,
        }
    }

    pub fn shortcuts(&self) -> &ShortcutTable {
        &self.shortcuts
    }

    /// Most recent diagnostics, oldest first.
    pub fn recent_diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.iter().cloned().collect()
    }

    /// Send an event to the host. Returns `false` if the host is gone.
    pub(crate) fn emit(&self, event: ViewEvent) -> bool {
        let name = event.name();
        match self.events.send(event) {
            Ok(()) => true,
            Err(_) => {
                trace!(event = name, "host unreachable, event dropped");
                false
            }
        }
    }

    /// Log, remember and forward a diagnostic.
    pub(crate) fn diagnose(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.diagnostics.push(diagnostic.clone());
        self.emit(ViewEvent::DiagnosticLog(diagnostic));
    }
}
