use std::sync::Arc;

use tokio::sync::watch;

use crate::credentials::{CredentialStore, SessionTokenOptions};
use crate::identity::{Identity, IdentityProvider};

use crate::session::errors::SessionError;
use crate::session::types::LoginData;

/// Bridges the identity provider and the backend session.
///
/// After a provider sign-in it persists the credential bundle - the
/// identity credential, the profile fields, and the ID token as the backend
/// bearer token - so "is this client authorized against the backend" is
/// answerable independent of provider state.
pub struct SessionBridge {
    provider: Arc<IdentityProvider>,
    store: Arc<CredentialStore>,
    identity_rx: watch::Receiver<Option<Identity>>,
}

impl SessionBridge {
    /// Subscribes to the provider's change notification once; the receiver
    /// lives as long as the bridge.
    pub fn new(provider: Arc<IdentityProvider>, store: Arc<CredentialStore>) -> Self {
        let identity_rx = provider.subscribe();
        Self {
            provider,
            store,
            identity_rx,
        }
    }

    /// Sign in and persist the credential bundle.
    ///
    /// Fail-closed: when remote sign-in succeeds but any persistence step
    /// fails, partial writes are rolled back and the whole login is
    /// reported as failed.
    pub async fn admin_login(&self, email: &str, password: &str) -> Result<LoginData, SessionError> {
        let signed_in = self.provider.sign_in(email, password).await?;
        let identity = &signed_in.identity;

        let persisted = self
            .store
            .set_identity_credential(&identity.uid, &signed_in.id_token)
            && self.store.set_session_token(
                &signed_in.id_token,
                &SessionTokenOptions::default(),
            )
            && self.store.set_profile(
                identity.display_name.as_deref().unwrap_or(&identity.email),
                &identity.email,
            );

        if !persisted {
            tracing::warn!("Login persistence failed for {}; rolling back", identity.uid);
            self.store.clear_all();
            return Err(SessionError::Persistence(
                "failed to persist credential bundle".to_string(),
            ));
        }

        tracing::debug!("Login complete for {}", identity.uid);
        Ok(LoginData::from(&signed_in))
    }

    /// Force-refresh the ID token for the current identity and re-persist
    /// it as the backend session token.
    pub async fn get_current_id_token(&self) -> Result<String, SessionError> {
        if self.identity_rx.borrow().is_none() {
            return Err(SessionError::NotSignedIn);
        }

        let token = self
            .provider
            .refresh_token(true)
            .await
            .ok_or_else(|| SessionError::TokenRefresh("refresh failed".to_string()))?;

        // The fresh token becomes the bearer credential for backend calls.
        if !self
            .store
            .set_session_token(&token, &SessionTokenOptions::default())
        {
            return Err(SessionError::Persistence(
                "failed to persist refreshed token".to_string(),
            ));
        }
        Ok(token)
    }

    /// Sign out of the provider and clear the credential bundle.
    ///
    /// Clearing runs unconditionally: a remote failure is still reported as
    /// an error, but local storage never claims authentication afterwards.
    pub async fn admin_logout(&self) -> Result<(), SessionError> {
        let remote_result = self.provider.sign_out().await;

        if !self.store.clear_all() {
            tracing::warn!("Credential clearing reported failure during logout");
        }

        remote_result.map_err(SessionError::from)
    }

    /// Answered from the in-memory snapshot set by the change notification,
    /// not by re-reading storage.
    pub fn is_authenticated(&self) -> bool {
        self.identity_rx.borrow().is_some()
    }

    pub fn current_user(&self) -> Option<Identity> {
        self.identity_rx.borrow().clone()
    }
}
