use std::collections::HashMap;
use std::sync::Mutex;

use crate::credentials::errors::CredentialError;
use crate::credentials::types::StoredValue;

use super::types::CredentialBackend;

const STORE_PREFIX: &str = "cred";

/// In-memory backend. Entries live as long as the process, which matches
/// session-storage semantics and keeps tests free of the filesystem.
pub struct MemoryCredentialBackend {
    entries: Mutex<HashMap<String, StoredValue>>,
}

impl MemoryCredentialBackend {
    pub fn new() -> Self {
        tracing::debug!("Creating new in-memory credential backend");
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }

    fn make_key(domain: &str, key: &str) -> String {
        format!("{STORE_PREFIX}:{domain}:{key}")
    }
}

impl Default for MemoryCredentialBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialBackend for MemoryCredentialBackend {
    fn put(&self, domain: &str, key: &str, value: StoredValue) -> Result<(), CredentialError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CredentialError::Lock(e.to_string()))?;
        entries.insert(Self::make_key(domain, key), value);
        Ok(())
    }

    fn get(&self, domain: &str, key: &str) -> Result<Option<StoredValue>, CredentialError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| CredentialError::Lock(e.to_string()))?;
        Ok(entries.get(&Self::make_key(domain, key)).cloned())
    }

    fn remove(&self, domain: &str, key: &str) -> Result<(), CredentialError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| CredentialError::Lock(e.to_string()))?;
        entries.remove(&Self::make_key(domain, key));
        Ok(())
    }
}
