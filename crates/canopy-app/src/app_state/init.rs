//! Window creation and view manager setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use canopy_config::schema::StartupMode;
use canopy_platform::{webview_data_dir, EnvSecretStore, SecretStore};
use canopy_webview::{ViewManager, WryEngine};

use super::core::CanopyApp;
use super::host::WinitHost;

impl CanopyApp {
    /// Create the window and the view manager.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ))
            .with_maximized(window_config.startup_mode == StartupMode::Maximized);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        self.start_runtime();

        let data_dir = match webview_data_dir() {
            Ok(dir) => Some(dir),
            Err(e) => {
                tracing::warn!("No persistent webview storage: {e}");
                None
            }
        };
        let engine = WryEngine::new(Arc::clone(&window), data_dir).with_devtools(self.devtools);
        let host = WinitHost::new(Arc::clone(&window));
        let store: Arc<dyn SecretStore> = Arc::new(EnvSecretStore::new());
        let runtime = self.tokio_runtime.as_ref().map(|rt| rt.handle().clone());

        let (manager, events) = ViewManager::new(
            Box::new(engine),
            Box::new(host),
            &self.config,
            store,
            runtime,
        );

        self.window = Some(window);
        self.manager = Some(manager);
        self.view_events = Some(events);
        true
    }

    /// Start the runtime used for secret lookups. Without it the shell still
    /// runs; credential injection reports itself unavailable.
    fn start_runtime(&mut self) {
        match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("canopy-secrets")
            .enable_all()
            .build()
        {
            Ok(rt) => self.tokio_runtime = Some(rt),
            Err(e) => tracing::warn!("Failed to start async runtime: {e}"),
        }
    }

    /// Create the configured apps and show the first one.
    pub(super) fn open_standard_apps(&mut self) {
        let Some(manager) = self.manager.as_mut() else {
            return;
        };
        let created = manager.initialize_standard_apps(&self.config.apps);
        tracing::info!(created, "Standard apps ready");

        if let Some(first) = manager.list_ids().first() {
            manager.show_view(first.as_str());
        }
    }
}
