//! CanopyApp struct definition and constructor.

use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use canopy_config::ShellConfig;
use canopy_webview::{ViewEvent, ViewManager};

/// Top-level application state.
pub struct CanopyApp {
    pub(super) config: ShellConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Hosted views
    pub(super) manager: Option<ViewManager>,
    pub(super) view_events: Option<Receiver<ViewEvent>>,

    // Runs secret fetches for credential injection
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Unread badge as last reported by the poller
    pub(super) has_badge: bool,

    pub(super) last_poll: Instant,

    pub(super) devtools: bool,
}

impl CanopyApp {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            config,
            window: None,
            manager: None,
            view_events: None,
            tokio_runtime: None,
            modifiers: winit::keyboard::ModifiersState::empty(),
            has_badge: false,
            last_poll: Instant::now(),
            devtools: cfg!(debug_assertions),
        }
    }

    /// Force the web inspector on for release builds.
    pub fn with_devtools(mut self, enabled: bool) -> Self {
        self.devtools |= enabled;
        self
    }
}
