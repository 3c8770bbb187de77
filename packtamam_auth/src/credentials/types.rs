use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::config::{SESSION_TOKEN_MAX_AGE, SESSION_TOKEN_SECURE};

/// One persisted entry. Attributes are only meaningful for the session
/// token but are carried uniformly so a backend can serialize every entry
/// the same way.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredValue {
    pub value: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub secure: bool,
    pub same_site: SameSite,
}

impl StoredValue {
    pub(crate) fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            expires_at: None,
            secure: false,
            same_site: SameSite::Strict,
        }
    }

    pub(crate) fn is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(at) if at < now)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

/// Persistence attributes for the backend session token.
#[derive(Debug, Clone)]
pub struct SessionTokenOptions {
    pub max_age: Duration,
    pub secure: bool,
    pub same_site: SameSite,
}

impl Default for SessionTokenOptions {
    fn default() -> Self {
        Self {
            max_age: Duration::seconds(*SESSION_TOKEN_MAX_AGE as i64),
            secure: *SESSION_TOKEN_SECURE,
            same_site: SameSite::Strict,
        }
    }
}

/// Identity-provider credential as read back from the store. Either field
/// may be absent independently; callers check for `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityCredential {
    pub uid: Option<String>,
    pub token: Option<String>,
}

/// Display fields cached for UI convenience.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Profile {
    pub name: Option<String>,
    pub email: Option<String>,
}
