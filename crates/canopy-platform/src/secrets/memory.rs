use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{SecretLookup, SecretStore};

/// In-memory store keyed by `(service, account)`.
#[derive(Default)]
pub struct MemorySecretStore {
    entries: Mutex<HashMap<(String, String), String>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(self, service: &str, account: &str, value: &str) -> Self {
        self.insert(service, account, value);
        self
    }

    pub fn insert(&self, service: &str, account: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert((service.to_string(), account.to_string()), value.to_string());
        }
    }
}

#[async_trait]
impl SecretStore for MemorySecretStore {
    async fn get(&self, service: &str, account: &str) -> SecretLookup {
        match self.entries.lock() {
            Ok(entries) => entries
                .get(&(service.to_string(), account.to_string()))
                .cloned()
                .map_or(SecretLookup::Missing, SecretLookup::Found),
            Err(e) => SecretLookup::Failed(format!("store lock poisoned: {e}")),
        }
    }
}
