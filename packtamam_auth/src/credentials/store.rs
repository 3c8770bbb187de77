use chrono::Utc;

use crate::utils::redact_token;

use super::backend::CredentialBackend;
use super::config::{
    DOMAIN_IDENTITY, DOMAIN_SESSION, KEY_EMAIL, KEY_ID_TOKEN, KEY_NAME, KEY_SESSION_TOKEN, KEY_UID,
};
use super::errors::CredentialError;
use super::types::{IdentityCredential, Profile, SessionTokenOptions, StoredValue};

/// Durable persistence for the credential bundle.
///
/// The store owns three logical domains: the identity-provider credential
/// (uid + ID token), the backend session token, and cached profile fields.
/// Every operation is local and infallible from the caller's perspective:
/// backend failures are logged and reported as `false`/`None`, never as
/// errors, so call sites branch on booleans instead of handling exceptions.
pub struct CredentialStore {
    backend: Box<dyn CredentialBackend>,
}

impl CredentialStore {
    pub fn new(backend: impl CredentialBackend) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Persist the identity-provider uid and ID token. Both fields are
    /// written or the operation reports failure; a failed second write rolls
    /// back the first so the domain is never half-populated.
    pub fn set_identity_credential(&self, uid: &str, token: &str) -> bool {
        if let Err(e) = self
            .backend
            .put(DOMAIN_IDENTITY, KEY_UID, StoredValue::plain(uid))
        {
            tracing::warn!("Failed to persist uid: {}", e);
            return false;
        }
        if let Err(e) = self
            .backend
            .put(DOMAIN_IDENTITY, KEY_ID_TOKEN, StoredValue::plain(token))
        {
            tracing::warn!(
                "Failed to persist ID token {}: {}",
                redact_token(token),
                e
            );
            self.remove_logged(DOMAIN_IDENTITY, KEY_UID);
            return false;
        }
        true
    }

    /// Read back the identity credential, with `None` for any missing field.
    pub fn get_identity_credential(&self) -> IdentityCredential {
        IdentityCredential {
            uid: self.get_value(DOMAIN_IDENTITY, KEY_UID),
            token: self.get_value(DOMAIN_IDENTITY, KEY_ID_TOKEN),
        }
    }

    /// Remove the identity credential and cached profile. Idempotent:
    /// clearing an already-clear domain reports success.
    pub fn clear_identity_credential(&self) -> bool {
        let mut ok = true;
        for key in [KEY_UID, KEY_ID_TOKEN, KEY_NAME, KEY_EMAIL] {
            ok &= self.remove_logged(DOMAIN_IDENTITY, key);
        }
        ok
    }

    /// Cache display fields for UI convenience.
    pub fn set_profile(&self, name: &str, email: &str) -> bool {
        let mut ok = true;
        if let Err(e) = self
            .backend
            .put(DOMAIN_IDENTITY, KEY_NAME, StoredValue::plain(name))
        {
            tracing::warn!("Failed to persist profile name: {}", e);
            ok = false;
        }
        if let Err(e) = self
            .backend
            .put(DOMAIN_IDENTITY, KEY_EMAIL, StoredValue::plain(email))
        {
            tracing::warn!("Failed to persist profile email: {}", e);
            ok = false;
        }
        ok
    }

    pub fn get_profile(&self) -> Profile {
        Profile {
            name: self.get_value(DOMAIN_IDENTITY, KEY_NAME),
            email: self.get_value(DOMAIN_IDENTITY, KEY_EMAIL),
        }
    }

    /// Persist the backend session token with its expiry and attributes.
    pub fn set_session_token(&self, token: &str, opts: &SessionTokenOptions) -> bool {
        let value = StoredValue {
            value: token.to_string(),
            expires_at: Some(Utc::now() + opts.max_age),
            secure: opts.secure,
            same_site: opts.same_site,
        };
        match self.backend.put(DOMAIN_SESSION, KEY_SESSION_TOKEN, value) {
            Ok(()) => {
                tracing::debug!("Persisted session token {}", redact_token(token));
                true
            }
            Err(e) => {
                tracing::warn!("Failed to persist session token: {}", e);
                false
            }
        }
    }

    /// The current session token, or `None` when absent or expired. An
    /// expired entry is removed on read so later reads are cheap.
    pub fn get_session_token(&self) -> Option<String> {
        let stored = match self.backend.get(DOMAIN_SESSION, KEY_SESSION_TOKEN) {
            Ok(stored) => stored?,
            Err(e) => {
                tracing::warn!("Failed to read session token: {}", e);
                return None;
            }
        };
        if stored.is_expired(Utc::now()) {
            tracing::debug!("Session token expired at {:?}", stored.expires_at);
            self.remove_logged(DOMAIN_SESSION, KEY_SESSION_TOKEN);
            return None;
        }
        Some(stored.value)
    }

    /// Remove the session token. Idempotent.
    pub fn clear_session_token(&self) -> bool {
        self.remove_logged(DOMAIN_SESSION, KEY_SESSION_TOKEN)
    }

    /// Clear both domains; reports the logical AND of the two clears.
    pub fn clear_all(&self) -> bool {
        let identity_cleared = self.clear_identity_credential();
        let session_cleared = self.clear_session_token();
        identity_cleared && session_cleared
    }

    fn get_value(&self, domain: &str, key: &str) -> Option<String> {
        match self.backend.get(domain, key) {
            Ok(stored) => stored.map(|v| v.value),
            Err(e) => {
                tracing::warn!("Failed to read {}/{}: {}", domain, key, e);
                None
            }
        }
    }

    fn remove_logged(&self, domain: &str, key: &str) -> bool {
        match self.backend.remove(domain, key) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to clear {}/{}: {}", domain, key, e);
                false
            }
        }
    }
}

impl std::fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialStore").finish_non_exhaustive()
    }
}
