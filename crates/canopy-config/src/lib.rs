//! Canopy configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use canopy_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod shortcuts;
pub mod toml_loader;
pub mod validation;

pub use schema::{ShellConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use canopy_common::ConfigError;

/// Load config from an explicit path, or from the platform default path.
///
/// The default path is created with a documented template if it does not
/// exist yet. The result is validated; a config that fails validation is
/// an error so the caller can decide whether to fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<ShellConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ShellConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
