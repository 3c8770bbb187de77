//! Shared test initialization and fixtures
//!
//! Unit tests inject provider/backend URLs directly (via `IdentityConfig::new`
//! and `ApiClient::with_login_route`), so most tests never read the
//! environment. The loader exists for the few that exercise the `from_env`
//! constructors.

use std::sync::Arc;
use std::sync::Once;

use crate::credentials::{CredentialStore, MemoryCredentialBackend};

/// Load test environment variables from `.env_test` (falling back to `.env`),
/// exactly once per process.
pub fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });
}

/// A fresh in-memory credential store, the default fixture for tests that
/// do not care about persistence details.
pub fn memory_store() -> Arc<CredentialStore> {
    Arc::new(CredentialStore::new(MemoryCredentialBackend::new()))
}
