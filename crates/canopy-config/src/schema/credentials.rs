//! Credential injection configuration.

use serde::{Deserialize, Serialize};

/// A login service and the URL fragments that identify its sign-in pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePatternConfig {
    /// Service name; also the secure-store namespace for its secrets.
    pub name: String,
    /// Host/path substrings. The first service with a matching pattern wins.
    pub patterns: Vec<String>,
}

impl ServicePatternConfig {
    fn new(name: &str, patterns: &[&str]) -> Self {
        Self {
            name: name.into(),
            patterns: patterns.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub enabled: bool,
    /// Ordered; classification stops at the first match.
    pub services: Vec<ServicePatternConfig>,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            services: vec![
                ServicePatternConfig::new(
                    "microsoft",
                    &["login.microsoftonline.com", "login.live.com"],
                ),
                ServicePatternConfig::new("google", &["accounts.google.com"]),
                ServicePatternConfig::new("github", &["github.com/login", "github.com/session"]),
            ],
        }
    }
}
