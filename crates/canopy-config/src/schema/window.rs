//! Host window configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StartupMode {
    #[default]
    Windowed,
    Maximized,
}

/// Host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial logical width (valid range: 400-10000).
    pub width: u32,
    /// Initial logical height (valid range: 300-10000).
    pub height: u32,
    pub startup_mode: StartupMode,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Canopy".into(),
            width: 1200,
            height: 800,
            startup_mode: StartupMode::Windowed,
        }
    }
}
