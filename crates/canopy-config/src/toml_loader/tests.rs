//! Tests for TOML config loading, creation, and path resolution.

use super::loader::load_or_create;
use super::template::default_config_toml;
use super::*;
use crate::schema::{ShellConfig, StartupMode};
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_parse_error() {
    let result = load_from_path(Path::new("/tmp/nonexistent_canopy_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, canopy_common::ConfigError::ParseError(_)));
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[window]
startup_mode = "maximized"

[layout]
sidebar_width = 300
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.startup_mode, StartupMode::Maximized);
    assert_eq!(config.layout.sidebar_width, 300);
    // Defaults preserved
    assert_eq!(config.layout.header_height, 48);
    assert_eq!(config.shortcuts.refresh, "Ctrl+R");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, canopy_common::ConfigError::ParseError(_)));
}

#[test]
fn missing_file_is_created_from_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = load_or_create(&path).unwrap();
    assert!(path.exists());
    assert_eq!(config.layout.header_height, 48);

    let reloaded = load_or_create(&path).unwrap();
    assert_eq!(reloaded.apps.len(), config.apps.len());
}

#[test]
fn template_parses_to_defaults() {
    let config: ShellConfig = toml::from_str(&default_config_toml()).unwrap();
    let defaults = ShellConfig::default();
    assert_eq!(config.layout.sidebar_width, defaults.layout.sidebar_width);
    assert_eq!(config.apps.len(), defaults.apps.len());
    assert_eq!(config.notifications.markers, defaults.notifications.markers);
}

#[test]
fn default_config_path_ends_with_canopy_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("canopy/config.toml"));
    }
}
