use std::collections::HashMap;

use async_trait::async_trait;

use super::{SecretLookup, SecretStore};

/// Reads secrets from environment variables named
/// `CANOPY_<SERVICE>_<ACCOUNT>`, upper-cased, with every character outside
/// `A-Z0-9` replaced by `_`.
///
/// Pair with a `.env` file loaded at startup.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore {
    /// Overrides consulted before the process environment.
    overrides: HashMap<String, String>,
}

impl EnvSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store backed by a fixed map instead of the process environment.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            overrides: vars.into_iter().collect(),
        }
    }

    /// Environment variable name for a `(service, account)` pair.
    pub fn var_name(service: &str, account: &str) -> String {
        let sanitize = |s: &str| -> String {
            s.chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() {
                        c.to_ascii_uppercase()
                    } else {
                        '_'
                    }
                })
                .collect()
        };
        format!("CANOPY_{}_{}", sanitize(service), sanitize(account))
    }

    fn lookup(&self, name: &str) -> SecretLookup {
        if let Some(value) = self.overrides.get(name) {
            return non_empty(value.clone());
        }
        if !self.overrides.is_empty() {
            return SecretLookup::Missing;
        }
        match std::env::var(name) {
            Ok(value) => non_empty(value),
            Err(std::env::VarError::NotPresent) => SecretLookup::Missing,
            Err(e) => SecretLookup::Failed(format!("{name}: {e}")),
        }
    }
}

fn non_empty(value: String) -> SecretLookup {
    if value.is_empty() {
        SecretLookup::Missing
    } else {
        SecretLookup::Found(value)
    }
}

#[async_trait]
impl SecretStore for EnvSecretStore {
    async fn get(&self, service: &str, account: &str) -> SecretLookup {
        let name = Self::var_name(service, account);
        let result = self.lookup(&name);
        tracing::trace!(var = %name, found = matches!(result, SecretLookup::Found(_)), "secret lookup");
        result
    }
}
