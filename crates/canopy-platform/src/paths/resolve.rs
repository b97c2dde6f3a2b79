use std::path::PathBuf;

use canopy_common::PlatformError;

pub(super) const APP_NAME: &str = "canopy";

/// Returns the platform-specific configuration directory.
///
/// - macOS: `~/Library/Application Support/canopy`
/// - Linux: `$XDG_CONFIG_HOME/canopy` (defaults to `~/.config/canopy`)
/// - Windows: `%APPDATA%\canopy`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific data directory.
///
/// - macOS: `~/Library/Application Support/canopy`
/// - Linux: `$XDG_DATA_HOME/canopy` (defaults to `~/.local/share/canopy`)
/// - Windows: `%APPDATA%\canopy`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// Returns the platform-specific cache directory.
pub fn cache_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::cache_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine cache directory".into()))?
        .join(APP_NAME))
}

/// Returns the path to the main configuration file.
///
/// Located at `config_dir()/config.toml`.
pub fn config_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Returns the path to the optional `.env` file holding secrets.
///
/// Located at `config_dir()/.env`.
pub fn env_file() -> Result<PathBuf, PlatformError> {
    Ok(config_dir()?.join(".env"))
}

/// Returns the storage partition shared by every hosted view.
///
/// Located at `data_dir()/webview`. Cookies and local storage live here.
pub fn webview_data_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("webview"))
}
