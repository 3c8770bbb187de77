use crate::credentials::errors::CredentialError;
use crate::credentials::types::StoredValue;

/// Persistence seam for the credential store.
///
/// Backends only deal in opaque `(domain, key)` pairs; the store owns the
/// domain layout. Every operation is local and synchronous - no backend is
/// allowed to perform network I/O.
pub trait CredentialBackend: Send + Sync + 'static {
    /// Store a value under a domain/key pair, replacing any existing entry.
    fn put(&self, domain: &str, key: &str, value: StoredValue) -> Result<(), CredentialError>;

    /// Fetch a value. Absent keys are `Ok(None)`, not errors.
    fn get(&self, domain: &str, key: &str) -> Result<Option<StoredValue>, CredentialError>;

    /// Remove a value. Removing an absent key succeeds.
    fn remove(&self, domain: &str, key: &str) -> Result<(), CredentialError>;
}
