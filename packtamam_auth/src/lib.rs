//! packtamam-auth - Authentication and session library for the PackTamam
//! admin dashboard
//!
//! This crate coordinates the pieces a restaurant-admin client needs to stay
//! signed in against the identity provider and the PackTamam backend:
//! durable credential persistence, email/password authentication, a session
//! bridge with token refresh, an HTTP client whose interceptor handles
//! expired sessions globally, and a sign-out orchestrator.

mod api;
mod coordination;
mod credentials;
mod identity;
mod session;
#[cfg(test)]
mod test_utils;
mod utils;

pub use api::{API_BASE_URL, ApiClient, ApiError, LOGIN_ROUTE, SessionExpiredHook};
pub use coordination::{CoordinationError, LogoutOrchestrator, LogoutReport};
pub use credentials::{
    CredentialBackend, CredentialError, CredentialStore, FileCredentialBackend, IdentityCredential,
    MemoryCredentialBackend, Profile, SameSite, SessionTokenOptions, StoredValue,
};
pub use identity::{
    Identity, IdentityConfig, IdentityError, IdentityProvider, PasswordCheck, SignedIn,
    validate_email, validate_password,
};
pub use session::{LoginData, SessionBridge, SessionError, SessionUser};

use std::sync::Arc;

/// The fully wired authentication layer.
///
/// Every component is constructed exactly once and shares the same store and
/// provider, so a 401 seen by the API client and a sign-out driven by the
/// orchestrator act on the same state.
pub struct AuthStack {
    pub store: Arc<CredentialStore>,
    pub provider: Arc<IdentityProvider>,
    pub bridge: SessionBridge,
    pub api: ApiClient,
    pub logout: LogoutOrchestrator,
}

impl AuthStack {
    /// Build the whole graph from environment configuration.
    ///
    /// Reads `IDENTITY_API_BASE_URL`, `IDENTITY_API_KEY`, `API_BASE_URL` and
    /// the optional `LOGIN_ROUTE`. The credential backend and the
    /// session-expired hook are the two deployment-specific seams and are
    /// injected by the caller.
    pub fn from_env(
        backend: impl CredentialBackend,
        on_session_expired: SessionExpiredHook,
    ) -> Result<Self, ApiError> {
        Self::new(
            IdentityConfig::from_env(),
            &API_BASE_URL,
            backend,
            on_session_expired,
        )
    }

    pub fn new(
        identity_config: IdentityConfig,
        api_base_url: &str,
        backend: impl CredentialBackend,
        on_session_expired: SessionExpiredHook,
    ) -> Result<Self, ApiError> {
        let store = Arc::new(CredentialStore::new(backend));
        let provider = Arc::new(IdentityProvider::new(identity_config));
        let bridge = SessionBridge::new(provider.clone(), store.clone());
        let api = ApiClient::new(api_base_url, store.clone(), on_session_expired)?;
        let logout = LogoutOrchestrator::new(provider.clone(), store.clone());
        Ok(Self {
            store,
            provider,
            bridge,
            api,
            logout,
        })
    }
}
