//! Canvas layout configuration: the chrome that surrounds the active view.

use serde::{Deserialize, Serialize};

/// Layout of the host chrome around hosted views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the header strip in logical pixels (valid range: 0-200).
    pub header_height: u32,
    /// Width taken by the sidebar while open (valid range: 100-1200).
    pub sidebar_width: u32,
    /// Whether the sidebar starts open.
    pub sidebar_open: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: 48,
            sidebar_width: 450,
            sidebar_open: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.header_height, 48);
        assert_eq!(config.sidebar_width, 450);
        assert!(!config.sidebar_open);
    }

    #[test]
    fn layout_config_partial_toml() {
        let config: LayoutConfig = toml::from_str("sidebar_width = 320").unwrap();
        assert_eq!(config.sidebar_width, 320);
        // Defaults preserved
        assert_eq!(config.header_height, 48);
    }
}
