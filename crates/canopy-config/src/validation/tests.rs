use super::*;
use crate::schema::{ServicePatternConfig, StandardAppConfig};

#[test]
fn default_config_is_valid() {
    assert!(validate(&ShellConfig::default()).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = ShellConfig::default();
    config.layout.header_height = 900;
    config.timing.resize_debounce_ms = 0;

    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.header_height"));
    assert!(err.contains("timing.resize_debounce_ms"));
}

#[test]
fn load_timeout_range_allows_disabling() {
    let mut config = ShellConfig::default();
    config.timing.load_timeout_ms = 0;
    assert!(validate(&config).is_ok());

    config.timing.load_timeout_ms = 700_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("timing.load_timeout_ms"));
}

#[test]
fn folded_shortcut_collision_fails_validation() {
    let mut config = ShellConfig::default();
    config.shortcuts.open_settings = "Cmd+R".into();
    config.shortcuts.toggle_todos = "Shift+Ctrl+P".into();

    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate shortcut"));
}

#[test]
fn rejects_duplicate_app_ids_case_insensitively() {
    let mut config = ShellConfig::default();
    config.apps = vec![
        StandardAppConfig::new("Mail", "https://mail.example.com", "Mail"),
        StandardAppConfig::new("mail", "https://other.example.com", "Other"),
    ];

    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("apps[1].id"));
    assert!(err.contains("duplicate"));
}

#[test]
fn rejects_malformed_app_id_and_url() {
    let mut config = ShellConfig::default();
    config.apps = vec![StandardAppConfig::new(
        "my app!",
        "file:///etc/passwd",
        "Bad",
    )];

    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("apps[0].id"));
    assert!(err.contains("apps[0].url"));
}

#[test]
fn rejects_service_without_patterns() {
    let mut config = ShellConfig::default();
    config.credentials.services.push(ServicePatternConfig {
        name: "okta".into(),
        patterns: vec![],
    });

    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("credentials.services[3].patterns"));
}

#[test]
fn rejects_duplicate_service_names() {
    let mut config = ShellConfig::default();
    config.credentials.services.push(ServicePatternConfig {
        name: "google".into(),
        patterns: vec!["accounts.google.com/v3".into()],
    });

    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("is a duplicate"));
}

#[test]
fn notification_period_out_of_range() {
    let mut config = ShellConfig::default();
    config.notifications.period_ms = 10;

    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("notifications.period_ms"));
}

#[test]
fn disabled_notifications_skip_target_checks() {
    let mut config = ShellConfig::default();
    config.notifications.enabled = false;
    config.notifications.view_id.clear();
    config.notifications.url_pattern.clear();
    config.notifications.markers.clear();

    assert!(validate(&config).is_ok());
}

#[test]
fn duplicate_shortcuts_are_reported() {
    let mut config = ShellConfig::default();
    config.shortcuts.next_app = "Ctrl+1".into();

    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate shortcut"));
}
