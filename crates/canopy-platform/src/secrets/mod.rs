//! Secure secret lookup used for credential injection.
//!
//! Lookups never fail on a missing entry: absence is a normal result.

mod env;
mod memory;

pub use env::EnvSecretStore;
pub use memory::MemorySecretStore;

use async_trait::async_trait;

/// Result of a single `(service, account)` lookup.
#[derive(Clone, PartialEq, Eq)]
pub enum SecretLookup {
    Found(String),
    Missing,
    Failed(String),
}

impl SecretLookup {
    /// The secret value, treating failures as absence.
    pub fn into_value(self) -> Option<String> {
        match self {
            SecretLookup::Found(v) => Some(v),
            SecretLookup::Missing | SecretLookup::Failed(_) => None,
        }
    }
}

impl std::fmt::Debug for SecretLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SecretLookup::Found(_) => f.write_str("Found(<redacted>)"),
            SecretLookup::Missing => f.write_str("Missing"),
            SecretLookup::Failed(e) => f.debug_tuple("Failed").field(e).finish(),
        }
    }
}

/// A store of per-service secrets.
#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn get(&self, service: &str, account: &str) -> SecretLookup;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_found_values() {
        let lookup = SecretLookup::Found("hunter2".into());
        assert_eq!(format!("{lookup:?}"), "Found(<redacted>)");
    }

    #[test]
    fn failures_read_as_absent() {
        assert_eq!(SecretLookup::Failed("locked".into()).into_value(), None);
        assert_eq!(SecretLookup::Missing.into_value(), None);
        assert_eq!(
            SecretLookup::Found("x".into()).into_value(),
            Some("x".to_string())
        );
    }
}
