use std::env;
use std::sync::LazyLock;

/// Base URL of the identity provider's account API,
/// e.g. `https://identitytoolkit.googleapis.com`.
pub static IDENTITY_API_BASE_URL: LazyLock<String> = LazyLock::new(|| {
    env::var("IDENTITY_API_BASE_URL").expect("IDENTITY_API_BASE_URL must be set")
});

/// Base URL of the token endpoint host. Defaults to the account API host;
/// deployments where token minting lives on a separate host override it.
pub static IDENTITY_TOKEN_BASE_URL: LazyLock<Option<String>> =
    LazyLock::new(|| env::var("IDENTITY_TOKEN_BASE_URL").ok());

/// Project API key appended to every identity request.
pub static IDENTITY_API_KEY: LazyLock<String> =
    LazyLock::new(|| env::var("IDENTITY_API_KEY").expect("IDENTITY_API_KEY must be set"));

/// Connection settings for the identity provider, resolvable from the
/// environment or constructed directly (tests point it at a stub server).
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    pub base_url: String,
    pub token_base_url: String,
    pub api_key: String,
}

impl IdentityConfig {
    pub fn from_env() -> Self {
        let base_url = IDENTITY_API_BASE_URL.clone();
        let token_base_url = IDENTITY_TOKEN_BASE_URL
            .clone()
            .unwrap_or_else(|| base_url.clone());
        Self {
            base_url,
            token_base_url,
            api_key: IDENTITY_API_KEY.clone(),
        }
    }

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            token_base_url: base_url.clone(),
            base_url,
            api_key: api_key.into(),
        }
    }

    pub(crate) fn sign_up_url(&self) -> String {
        self.accounts_url("signUp")
    }

    pub(crate) fn sign_in_url(&self) -> String {
        self.accounts_url("signInWithPassword")
    }

    pub(crate) fn send_oob_code_url(&self) -> String {
        self.accounts_url("sendOobCode")
    }

    pub(crate) fn refresh_url(&self) -> String {
        format!(
            "{}/v1/token?key={}",
            self.token_base_url.trim_end_matches('/'),
            self.api_key
        )
    }

    pub(crate) fn revoke_url(&self) -> String {
        format!(
            "{}/v1/token:revoke?key={}",
            self.token_base_url.trim_end_matches('/'),
            self.api_key
        )
    }

    fn accounts_url(&self, action: &str) -> String {
        format!(
            "{}/v1/accounts:{}?key={}",
            self.base_url.trim_end_matches('/'),
            action,
            self.api_key
        )
    }
}
