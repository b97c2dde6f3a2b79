//! Standard (pre-provisioned) app views.

use serde::{Deserialize, Serialize};

/// One pre-provisioned view created at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardAppConfig {
    /// Stable id; case-insensitive.
    pub id: String,
    pub url: String,
    #[serde(default)]
    pub title: String,
    /// Hidden apps are not created at startup.
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Overrides the engine's user agent for this app.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_visible() -> bool {
    true
}

impl StandardAppConfig {
    pub fn new(id: impl Into<String>, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            title: title.into(),
            visible: true,
            user_agent: None,
        }
    }
}

/// The app set used when the config file does not list `[[apps]]`.
pub fn default_apps() -> Vec<StandardAppConfig> {
    vec![
        StandardAppConfig::new("mail", "https://outlook.office.com/mail/", "Mail"),
        StandardAppConfig::new(
            "calendar",
            "https://outlook.office.com/calendar/",
            "Calendar",
        ),
        StandardAppConfig::new("teams", "https://teams.microsoft.com/", "Teams"),
        StandardAppConfig {
            visible: false,
            ..StandardAppConfig::new("github", "https://github.com/", "GitHub")
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_defaults_to_true() {
        let app: StandardAppConfig =
            toml::from_str("id = \"wiki\"\nurl = \"https://wiki.example.com\"").unwrap();
        assert!(app.visible);
        assert!(app.title.is_empty());
        assert!(app.user_agent.is_none());
    }

    #[test]
    fn user_agent_override_parses() {
        let app: StandardAppConfig = toml::from_str(
            "id = \"teams\"\nurl = \"https://teams.example.com\"\nuser_agent = \"Edge/120\"",
        )
        .unwrap();
        assert_eq!(app.user_agent.as_deref(), Some("Edge/120"));
    }

    #[test]
    fn default_apps_have_unique_ids() {
        let apps = default_apps();
        let mut ids: Vec<&str> = apps.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), apps.len());
    }
}
