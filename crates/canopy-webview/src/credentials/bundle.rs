use canopy_common::ViewId;
use canopy_platform::{SecretLookup, SecretStore};
use serde_json::json;

/// Store account holding the login identifier.
pub const LOGIN_ACCOUNT: &str = "username";
pub const PASSWORD_ACCOUNT: &str = "password";
pub const TOTP_ACCOUNT: &str = "totp";

/// Secrets for one service, one lookup result per field.
///
/// `Debug` output never contains secret values.
#[derive(Debug, Clone, PartialEq)]
pub struct CredentialBundle {
    pub service: String,
    pub login: SecretLookup,
    pub password: SecretLookup,
    pub totp: SecretLookup,
}

impl CredentialBundle {
    /// Fetch every field concurrently. Each field tolerates absence.
    pub async fn fetch(store: &dyn SecretStore, service: &str) -> Self {
        let (login, password, totp) = tokio::join!(
            store.get(service, LOGIN_ACCOUNT),
            store.get(service, PASSWORD_ACCOUNT),
            store.get(service, TOTP_ACCOUNT),
        );
        Self {
            service: service.to_string(),
            login,
            password,
            totp,
        }
    }

    pub fn has_login(&self) -> bool {
        matches!(self.login, SecretLookup::Found(_))
    }

    /// Fields whose lookup failed, with the store's error.
    pub fn failures(&self) -> Vec<(&'static str, &str)> {
        [
            (LOGIN_ACCOUNT, &self.login),
            (PASSWORD_ACCOUNT, &self.password),
            (TOTP_ACCOUNT, &self.totp),
        ]
        .into_iter()
        .filter_map(|(name, lookup)| match lookup {
            SecretLookup::Failed(e) => Some((name, e.as_str())),
            _ => None,
        })
        .collect()
    }

    /// Message body pushed into the page. `None` without a login.
    pub fn to_payload(&self, view_id: &ViewId) -> Option<serde_json::Value> {
        let login = self.login.clone().into_value()?;
        Some(json!({
            "service": self.service,
            "viewId": view_id,
            "login": login,
            "password": self.password.clone().into_value(),
            "totp": self.totp.clone().into_value(),
        }))
    }
}
