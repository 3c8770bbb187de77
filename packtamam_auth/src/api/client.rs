use std::sync::Arc;

use http::StatusCode;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::credentials::CredentialStore;
use crate::utils::redact_token;

use super::config::{API_BASE_URL, LOGIN_ROUTE, REQUEST_TIMEOUT};
use super::errors::{ApiError, GENERIC_SERVER_ERROR};

/// Invoked after a 401 teardown with the login route to navigate to.
/// Fires for a 401 from any request; callers cannot opt out.
pub type SessionExpiredHook = Arc<dyn Fn(&str) + Send + Sync>;

/// Body shape the backend uses for error payloads.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client for the PackTamam backend.
///
/// Every request carries `Content-Type: application/json`, the current
/// bearer token when one is stored, and the fixed 10 s timeout. Responses
/// are classified uniformly: a 401 tears down the whole session before the
/// caller sees the error.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    store: Arc<CredentialStore>,
    login_route: String,
    on_session_expired: SessionExpiredHook,
}

impl ApiClient {
    pub fn new(
        base_url: &str,
        store: Arc<CredentialStore>,
        on_session_expired: SessionExpiredHook,
    ) -> Result<Self, ApiError> {
        Self::with_login_route(base_url, store, on_session_expired, LOGIN_ROUTE.clone())
    }

    /// Construct from `API_BASE_URL`/`LOGIN_ROUTE` in the environment.
    pub fn from_env(
        store: Arc<CredentialStore>,
        on_session_expired: SessionExpiredHook,
    ) -> Result<Self, ApiError> {
        Self::with_login_route(&API_BASE_URL, store, on_session_expired, LOGIN_ROUTE.clone())
    }

    pub fn with_login_route(
        base_url: &str,
        store: Arc<CredentialStore>,
        on_session_expired: SessionExpiredHook,
        login_route: String,
    ) -> Result<Self, ApiError> {
        // A trailing slash keeps Url::join from eating the last path segment.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|e| ApiError::Url(e.to_string()))?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            store,
            login_route,
            on_session_expired,
        })
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.execute(Method::GET, path, None::<&()>).await?;
        Self::decode(response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        Self::decode(response).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.execute(Method::PUT, path, Some(body)).await?;
        Self::decode(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    /// Single funnel for every request so the interceptor behavior is
    /// uniform regardless of which screen initiated the call.
    async fn execute<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, ApiError> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Url(e.to_string()))?;

        let mut request = self
            .http
            .request(method, url)
            .timeout(REQUEST_TIMEOUT)
            .header(http::header::CONTENT_TYPE, "application/json");

        // Attach the bearer token when present; otherwise send the request
        // unauthenticated and let the backend decide.
        if let Some(token) = self.store.get_session_token() {
            tracing::debug!("Attaching bearer token {}", redact_token(&token));
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                // No response received: transient, credentials untouched.
                tracing::warn!("Backend request failed before a response: {}", e);
                return Err(ApiError::Network);
            }
        };

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(self.expire_session()),
            status if status.is_server_error() => {
                let message = Self::backend_message(response).await;
                Err(ApiError::Server(
                    message.unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string()),
                ))
            }
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::Status {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    /// Global 401 side effect: clear every credential domain and hand
    /// control to the navigation hook.
    fn expire_session(&self) -> ApiError {
        tracing::warn!("Backend returned 401; tearing down session state");
        if !self.store.clear_all() {
            tracing::warn!("Credential clearing reported failure during 401 teardown");
        }
        (self.on_session_expired)(&self.login_route);
        ApiError::SessionExpired
    }

    async fn backend_message(response: reqwest::Response) -> Option<String> {
        let body = response.text().await.ok()?;
        serde_json::from_str::<ErrorBody>(&body).ok()?.message
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("login_route", &self.login_route)
            .finish_non_exhaustive()
    }
}
