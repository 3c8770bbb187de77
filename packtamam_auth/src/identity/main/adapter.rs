use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::{RwLock, watch};

use crate::identity::config::IdentityConfig;
use crate::identity::errors::IdentityError;
use crate::identity::types::{Identity, SignedIn};
use crate::identity::validation::{check_credentials, validate_email};
use crate::utils::redact_token;

use super::wire::{
    AccountResponse, ErrorResponse, RefreshRequest, RefreshResponse, RevokeRequest,
    SendOobCodeRequest, SignInRequest, SignUpRequest,
};

const PROVIDER_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const PASSWORD_RESET_REQUEST_TYPE: &str = "PASSWORD_RESET";

/// Tokens for the currently signed-in identity, kept out of the watch
/// channel so observers only ever see the identity snapshot.
struct TokenState {
    id_token: String,
    refresh_token: Option<String>,
}

/// Adapter over the identity provider's REST API.
///
/// Owns the process-wide "current identity" cache and publishes changes on
/// a watch channel; consumers subscribe once and read synchronously. One
/// instance is constructed at startup and shared by `Arc`.
pub struct IdentityProvider {
    http: reqwest::Client,
    config: IdentityConfig,
    current: watch::Sender<Option<Identity>>,
    tokens: RwLock<Option<TokenState>>,
}

impl IdentityProvider {
    pub fn new(config: IdentityConfig) -> Self {
        let (current, _) = watch::channel(None);
        Self {
            http: reqwest::Client::new(),
            config,
            current,
            tokens: RwLock::new(None),
        }
    }

    /// Register a new account. Validation runs before any network call, so
    /// a malformed email or short password never leaves the process.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: Option<&str>,
    ) -> Result<Identity, IdentityError> {
        check_credentials(email, password)?;

        let request = SignUpRequest {
            email,
            password,
            display_name,
            return_secure_token: true,
        };
        let response: AccountResponse = self.post_json(&self.config.sign_up_url(), &request).await?;

        let signed_in = self.apply_account_response(response).await;
        tracing::debug!("Signed up {}", signed_in.identity.uid);
        Ok(signed_in.identity)
    }

    /// Authenticate with email and password. On success the current
    /// identity is updated and watchers are notified before returning.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignedIn, IdentityError> {
        check_credentials(email, password)?;

        let request = SignInRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: AccountResponse = self.post_json(&self.config.sign_in_url(), &request).await?;

        let signed_in = self.apply_account_response(response).await;
        tracing::debug!(
            "Signed in {} with token {}",
            signed_in.identity.uid,
            redact_token(&signed_in.id_token)
        );
        Ok(signed_in)
    }

    /// Trigger a password-reset email. A provider "not found" reads as
    /// success so this call never reveals whether the address is registered.
    pub async fn send_password_reset(&self, email: &str) -> Result<(), IdentityError> {
        if email.is_empty() {
            return Err(IdentityError::MissingEmail);
        }
        if !validate_email(email) {
            return Err(IdentityError::InvalidEmail);
        }

        let request = SendOobCodeRequest {
            request_type: PASSWORD_RESET_REQUEST_TYPE,
            email,
        };
        match self
            .post_json::<_, serde_json::Value>(&self.config.send_oob_code_url(), &request)
            .await
        {
            Ok(_) => Ok(()),
            Err(IdentityError::UserNotFound) => {
                tracing::debug!("Password reset for unknown address reported as success");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Sign out. The local identity cache is cleared and watchers notified
    /// even when the remote revocation fails; the failure is still returned
    /// so the caller can report it.
    pub async fn sign_out(&self) -> Result<(), IdentityError> {
        let refresh_token = {
            let tokens = self.tokens.read().await;
            tokens.as_ref().and_then(|t| t.refresh_token.clone())
        };

        let remote_result = match refresh_token {
            Some(token) => self.revoke_refresh_token(&token).await,
            None => Ok(()),
        };

        *self.tokens.write().await = None;
        self.current.send_replace(None);
        tracing::debug!("Cleared local identity state");

        remote_result
    }

    /// Synchronous read of the cached identity. Never touches the network.
    pub fn current_identity(&self) -> Option<Identity> {
        self.current.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    /// Change-notification channel; the session bridge subscribes once at
    /// construction.
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.current.subscribe()
    }

    /// Mint a fresh ID token for the current identity. Returns `None` when
    /// no identity is current or the refresh fails (failures are logged,
    /// never propagated). With `force` unset a cached token is reused.
    pub async fn refresh_token(&self, force: bool) -> Option<String> {
        if self.current.borrow().is_none() {
            tracing::debug!("refresh_token called with no current identity");
            return None;
        }

        if !force {
            let tokens = self.tokens.read().await;
            if let Some(state) = tokens.as_ref() {
                return Some(state.id_token.clone());
            }
        }

        let refresh_token = {
            let tokens = self.tokens.read().await;
            tokens.as_ref().and_then(|t| t.refresh_token.clone())
        };
        let Some(refresh_token) = refresh_token else {
            tracing::warn!("No refresh token available for current identity");
            return None;
        };

        let request = RefreshRequest {
            grant_type: "refresh_token",
            refresh_token: &refresh_token,
        };
        let response = self
            .http
            .post(self.config.refresh_url())
            .timeout(PROVIDER_REQUEST_TIMEOUT)
            .form(&request)
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Token refresh failed: {}", e);
                return None;
            }
        };
        if !response.status().is_success() {
            tracing::warn!("Token refresh rejected with status {}", response.status());
            return None;
        }

        let refreshed: RefreshResponse = match response.json().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Malformed token refresh response: {}", e);
                return None;
            }
        };

        let mut tokens = self.tokens.write().await;
        *tokens = Some(TokenState {
            id_token: refreshed.id_token.clone(),
            refresh_token: refreshed.refresh_token.or(Some(refresh_token)),
        });
        tracing::debug!("Refreshed ID token {}", redact_token(&refreshed.id_token));
        Some(refreshed.id_token)
    }

    async fn revoke_refresh_token(&self, token: &str) -> Result<(), IdentityError> {
        let request = RevokeRequest { token };
        let response = self
            .http
            .post(self.config.revoke_url())
            .timeout(PROVIDER_REQUEST_TIMEOUT)
            .json(&request)
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        match response.status() {
            status if status.is_success() => Ok(()),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(parse_provider_error(status, &body))
            }
        }
    }

    async fn apply_account_response(&self, response: AccountResponse) -> SignedIn {
        let identity = Identity {
            uid: response.local_id,
            email: response.email,
            display_name: response.display_name,
            email_verified: response.email_verified,
        };
        {
            let mut tokens = self.tokens.write().await;
            *tokens = Some(TokenState {
                id_token: response.id_token.clone(),
                refresh_token: response.refresh_token,
            });
        }
        self.current.send_replace(Some(identity.clone()));
        SignedIn {
            identity,
            id_token: response.id_token,
        }
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, IdentityError> {
        let response = self
            .http
            .post(url)
            .timeout(PROVIDER_REQUEST_TIMEOUT)
            .json(body)
            .send()
            .await
            .map_err(|e| IdentityError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(parse_provider_error(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| IdentityError::Unexpected(format!("malformed provider response: {e}")))
    }
}

fn parse_provider_error(status: reqwest::StatusCode, body: &str) -> IdentityError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(envelope) => {
            let err = IdentityError::from_provider_code(&envelope.error.message);
            tracing::debug!(
                "Provider rejected request: {} ({})",
                envelope.error.message,
                status
            );
            err
        }
        Err(_) => {
            tracing::warn!("Unparseable provider error body (status {})", status);
            IdentityError::Unexpected(format!("provider returned status {status}"))
        }
    }
}
