//! Full configuration validation.
//!
//! Validates numeric ranges, shortcut uniqueness, app ids and service
//! patterns. Each domain has its own submodule; this orchestrator calls them
//! all and collects errors into a single `ConfigError`.

mod apps;
mod helpers;
mod layout;
mod services;

#[cfg(test)]
mod tests;

use crate::schema::ShellConfig;
use crate::shortcuts;
use canopy_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = shortcuts::validate_no_duplicates(&config.shortcuts) {
        errors.push(e.to_string());
    }

    layout::validate_window(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    layout::validate_timing(&mut errors, config);
    apps::validate_apps(&mut errors, config);
    services::validate_credentials(&mut errors, config);
    services::validate_notifications(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
