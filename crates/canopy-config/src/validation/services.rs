//! Credential service and notification poller validation.

use std::collections::HashSet;

use crate::schema::ShellConfig;

use super::helpers::validate_range;

pub(crate) fn validate_credentials(errors: &mut Vec<String>, config: &ShellConfig) {
    let mut names = HashSet::new();

    for (i, service) in config.credentials.services.iter().enumerate() {
        if service.name.trim().is_empty() {
            errors.push(format!("credentials.services[{i}].name must not be empty"));
        } else if !names.insert(service.name.as_str()) {
            errors.push(format!(
                "credentials.services[{i}].name = {:?} is a duplicate",
                service.name
            ));
        }

        if service.patterns.is_empty() || service.patterns.iter().any(|p| p.trim().is_empty()) {
            errors.push(format!(
                "credentials.services[{i}].patterns must be a non-empty list of non-empty strings"
            ));
        }
    }
}

pub(crate) fn validate_notifications(errors: &mut Vec<String>, config: &ShellConfig) {
    let n = &config.notifications;
    validate_range(errors, "notifications.grace_ms", n.grace_ms, 0, 60000);
    validate_range(errors, "notifications.period_ms", n.period_ms, 250, 600000);

    if n.enabled {
        if n.view_id.trim().is_empty() && n.url_pattern.trim().is_empty() {
            errors.push("notifications needs a view_id or a url_pattern when enabled".into());
        }
        if n.markers.iter().all(|m| m.trim().is_empty()) {
            errors.push("notifications.markers must contain at least one marker".into());
        }
    }
}
