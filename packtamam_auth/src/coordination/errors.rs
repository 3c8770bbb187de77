//! Error types for cross-module coordination operations

use thiserror::Error;

use crate::identity::IdentityError;
use crate::session::SessionError;

/// Errors that can occur while coordinating sign-out across modules
#[derive(Error, Debug)]
pub enum CoordinationError {
    /// A sign-out is already running; the duplicate request was ignored
    #[error("Sign-out already in progress")]
    LogoutInFlight,

    /// General coordination error
    #[error("Coordination error: {0}")]
    Coordination(String),

    /// Error from identity provider operations
    #[error("Identity error: {0}")]
    IdentityError(IdentityError),

    /// Error from session operations
    #[error("Session error: {0}")]
    SessionError(SessionError),
}

impl CoordinationError {
    /// Log the error and return self
    ///
    /// Logs the error with appropriate context and returns self, allowing
    /// for method chaining and explicit logging when needed.
    pub fn log(self) -> Self {
        match &self {
            Self::LogoutInFlight => tracing::warn!("Sign-out already in progress"),
            Self::Coordination(msg) => tracing::error!("Coordination error: {}", msg),
            Self::IdentityError(err) => tracing::error!("Identity error: {}", err),
            Self::SessionError(err) => tracing::error!("Session error: {}", err),
        }
        self
    }
}

// Custom From implementations that automatically log errors

impl From<IdentityError> for CoordinationError {
    fn from(err: IdentityError) -> Self {
        let error = Self::IdentityError(err);
        tracing::error!("{}", error);
        error
    }
}

impl From<SessionError> for CoordinationError {
    fn from(err: SessionError) -> Self {
        let error = Self::SessionError(err);
        tracing::error!("{}", error);
        error
    }
}
