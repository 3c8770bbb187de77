use std::env;
use std::sync::LazyLock;

/// Domain prefix for identity-provider fields (uid, ID token, profile).
pub(crate) const DOMAIN_IDENTITY: &str = "identity";

/// Domain prefix for the backend session token.
pub(crate) const DOMAIN_SESSION: &str = "session";

pub(crate) const KEY_UID: &str = "uid";
pub(crate) const KEY_ID_TOKEN: &str = "id_token";
pub(crate) const KEY_NAME: &str = "name";
pub(crate) const KEY_EMAIL: &str = "email";
pub(crate) const KEY_SESSION_TOKEN: &str = "token";

pub static SESSION_TOKEN_MAX_AGE: LazyLock<u64> = LazyLock::new(|| {
    env::var("SESSION_TOKEN_MAX_AGE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(604_800) // Default to 7 days if not set or invalid
});

/// The Secure attribute is only set in production-like deployments.
pub static SESSION_TOKEN_SECURE: LazyLock<bool> = LazyLock::new(|| {
    env::var("ENVIRONMENT")
        .map(|v| v.eq_ignore_ascii_case("production"))
        .unwrap_or(false)
});
