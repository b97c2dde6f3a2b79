//! Internal constants for the app state module.

use std::time::Duration;

/// How often to poll the view manager (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);

/// Grace period for background work when shutting down.
pub(super) const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(2);
