//! Timing knobs for layout coalescing and startup error suppression.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Window resize events are coalesced into one layout pass per window
    /// of this many milliseconds (valid range: 1-1000).
    pub resize_debounce_ms: u32,
    /// Load errors within this many milliseconds of startup are reported as
    /// diagnostics instead of `error` events (valid range: 0-60000).
    pub startup_grace_ms: u32,
    /// A load still running after this many milliseconds is reported as
    /// failed. 0 disables the watchdog (valid range: 0-600000).
    pub load_timeout_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            resize_debounce_ms: 16,
            startup_grace_ms: 5000,
            load_timeout_ms: 30_000,
        }
    }
}
