use std::fs;

use canopy_common::PlatformError;

use super::resolve::{cache_dir, config_dir, data_dir, webview_data_dir};

/// Creates all application directories if they do not already exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?, cache_dir()?, webview_data_dir()?] {
        fs::create_dir_all(&dir)
            .map_err(|e| PlatformError::PathError(format!("{}: {e}", dir.display())))?;
    }
    Ok(())
}
