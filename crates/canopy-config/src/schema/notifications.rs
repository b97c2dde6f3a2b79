//! Unread-badge polling configuration.

use serde::{Deserialize, Serialize};

/// Which view is probed for an unread marker, and how often.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub enabled: bool,
    /// View id eligible for polling.
    pub view_id: String,
    /// A loaded URL containing this substring is also eligible.
    pub url_pattern: String,
    /// Delay before the first probe after a load finishes (valid range: 0-60000).
    pub grace_ms: u32,
    /// Probe period (valid range: 250-600000).
    pub period_ms: u32,
    /// Substrings of the page icon reference that indicate unread items.
    pub markers: Vec<String>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            view_id: "teams".into(),
            url_pattern: "teams.microsoft.com".into(),
            grace_ms: 3000,
            period_ms: 5000,
            markers: vec!["unread".into(), "badge".into(), "notification".into()],
        }
    }
}
