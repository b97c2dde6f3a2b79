//! Core TOML config loading: read from path or platform default.

use crate::schema::ShellConfig;
use canopy_common::ConfigError;
use std::path::Path;
use tracing::info;

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// Validation is left to the caller (see [`crate::load_config`]).
pub fn load_from_path(path: &Path) -> Result<ShellConfig, ConfigError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: ShellConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/canopy/config.toml`
/// On Linux: `~/.config/canopy/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<ShellConfig, ConfigError> {
    let path = default_config_path()?;
    load_or_create(&path)
}

pub(super) fn load_or_create(path: &Path) -> Result<ShellConfig, ConfigError> {
    if !path.exists() {
        info!("no config found at {}, creating default", path.display());
        create_default_config(path)?;
        return Ok(ShellConfig::default());
    }
    load_from_path(path)
}
