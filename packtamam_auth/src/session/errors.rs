use thiserror::Error;

use crate::identity::IdentityError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    #[error("No user signed in")]
    NotSignedIn,

    /// Remote sign-in/sign-out succeeded or failed at the provider.
    #[error("Identity error: {0}")]
    Identity(#[from] IdentityError),

    /// Local persistence failed after a successful remote operation. The
    /// overall operation is reported as failed (fail-closed).
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Token refresh error: {0}")]
    TokenRefresh(String),
}

impl SessionError {
    /// Fixed user-facing message for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotSignedIn => "No user signed in.",
            Self::Identity(e) => e.user_message(),
            Self::Persistence(_) => "Could not save your session. Please try again.",
            Self::TokenRefresh(_) => "Your session could not be refreshed. Please sign in again.",
        }
    }
}
