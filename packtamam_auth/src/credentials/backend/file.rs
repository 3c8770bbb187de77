use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::credentials::errors::CredentialError;
use crate::credentials::types::StoredValue;

use super::types::CredentialBackend;

const STORE_PREFIX: &str = "cred";

/// File-backed backend: one JSON document holding every entry, rewritten on
/// each mutation. This is the durable analogue of browser storage for a
/// native client; writes go through a temp file followed by a rename so a
/// crash mid-write never truncates the document.
pub struct FileCredentialBackend {
    path: PathBuf,
    // Serializes read-modify-write cycles on the document.
    lock: Mutex<()>,
}

impl FileCredentialBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        tracing::debug!("Creating file credential backend at {}", path.display());
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn make_key(domain: &str, key: &str) -> String {
        format!("{STORE_PREFIX}:{domain}:{key}")
    }

    fn load(&self) -> Result<HashMap<String, StoredValue>, CredentialError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|e| CredentialError::Serde(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(CredentialError::Io(e.to_string())),
        }
    }

    fn save(&self, entries: &HashMap<String, StoredValue>) -> Result<(), CredentialError> {
        let json =
            serde_json::to_string_pretty(entries).map_err(|e| CredentialError::Serde(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| CredentialError::Io(e.to_string()))?;
            }
        }

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json).map_err(|e| CredentialError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| CredentialError::Io(e.to_string()))?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

impl CredentialBackend for FileCredentialBackend {
    fn put(&self, domain: &str, key: &str, value: StoredValue) -> Result<(), CredentialError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| CredentialError::Lock(e.to_string()))?;
        let mut entries = self.load()?;
        entries.insert(Self::make_key(domain, key), value);
        self.save(&entries)
    }

    fn get(&self, domain: &str, key: &str) -> Result<Option<StoredValue>, CredentialError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| CredentialError::Lock(e.to_string()))?;
        let entries = self.load()?;
        Ok(entries.get(&Self::make_key(domain, key)).cloned())
    }

    fn remove(&self, domain: &str, key: &str) -> Result<(), CredentialError> {
        let _guard = self
            .lock
            .lock()
            .map_err(|e| CredentialError::Lock(e.to_string()))?;
        let mut entries = self.load()?;
        if entries.remove(&Self::make_key(domain, key)).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
