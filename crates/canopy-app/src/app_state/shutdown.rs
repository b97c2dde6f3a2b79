//! Graceful shutdown: destroy views, stop background work.

use super::core::CanopyApp;
use super::types::SHUTDOWN_TIMEOUT;

impl CanopyApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Views go first so no page outlives its window; the runtime goes
    /// last to cancel any secret lookup still in flight.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(manager) = self.manager.as_mut() {
            manager.shutdown();
        }
        self.manager = None;
        self.view_events = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(SHUTDOWN_TIMEOUT);
        }

        self.window = None;
        tracing::info!("Graceful shutdown complete");
    }
}

#[cfg(test)]
mod tests {
    use crate::app_state::core::CanopyApp;
    use canopy_config::ShellConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = CanopyApp::new(ShellConfig::default());
        app.shutdown();
        assert!(app.manager.is_none());
        assert!(app.window.is_none());
    }

    #[test]
    fn shutdown_twice_is_harmless() {
        let mut app = CanopyApp::new(ShellConfig::default());
        app.shutdown();
        app.shutdown();
        assert!(app.tokio_runtime.is_none());
    }
}
