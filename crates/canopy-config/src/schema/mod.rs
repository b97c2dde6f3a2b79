//! Configuration schema types for Canopy.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults below.

mod apps;
mod credentials;
mod layout;
mod notifications;
mod shortcut_config;
mod system;
mod timing;
mod window;

pub use apps::*;
pub use credentials::*;
pub use layout::*;
pub use notifications::*;
pub use shortcut_config::*;
pub use system::*;
pub use timing::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for the shell.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub timing: TimingConfig,
    pub shortcuts: ShortcutConfig,
    pub apps: Vec<StandardAppConfig>,
    pub credentials: CredentialsConfig,
    pub notifications: NotificationConfig,
    pub logging: LoggingConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            layout: LayoutConfig::default(),
            timing: TimingConfig::default(),
            shortcuts: ShortcutConfig::default(),
            apps: default_apps(),
            credentials: CredentialsConfig::default(),
            notifications: NotificationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_yields_defaults() {
        let config: ShellConfig = toml::from_str("").unwrap();
        assert_eq!(config.layout.header_height, 48);
        assert_eq!(config.timing.resize_debounce_ms, 16);
        assert_eq!(config.timing.load_timeout_ms, 30_000);
        assert_eq!(config.apps.len(), default_apps().len());
        assert!(config.credentials.enabled);
    }

    #[test]
    fn apps_array_replaces_default_apps() {
        let toml_str = r#"
[[apps]]
id = "wiki"
url = "https://wiki.example.com"
title = "Wiki"
"#;
        let config: ShellConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.apps.len(), 1);
        assert_eq!(config.apps[0].id, "wiki");
        assert!(config.apps[0].visible);
    }

    #[test]
    fn default_config_serializes_to_toml() {
        let config = ShellConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: ShellConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.shortcuts.command_palette, "Ctrl+Shift+P");
        assert_eq!(back.notifications.view_id, config.notifications.view_id);
    }
}
