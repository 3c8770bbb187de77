use thiserror::Error;

/// Identity-provider failures. Each variant is terminal for the current
/// call (this layer never retries) and maps to a fixed human-readable
/// message via [`IdentityError::user_message`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum IdentityError {
    #[error("Invalid credential")]
    InvalidCredential,

    #[error("User not found")]
    UserNotFound,

    #[error("Wrong password")]
    WrongPassword,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("User disabled")]
    UserDisabled,

    #[error("Too many requests")]
    TooManyRequests,

    #[error("Network failure: {0}")]
    Network(String),

    #[error("Email already in use")]
    EmailAlreadyInUse,

    #[error("Weak password")]
    WeakPassword,

    #[error("Missing email")]
    MissingEmail,

    #[error("Invalid or expired reset code")]
    InvalidResetCode,

    #[error("Operation not allowed")]
    OperationNotAllowed,

    #[error("Unexpected provider error: {0}")]
    Unexpected(String),
}

impl IdentityError {
    /// Translate a provider error code into a variant. Unmapped codes fall
    /// back to [`IdentityError::Unexpected`].
    pub(crate) fn from_provider_code(code: &str) -> Self {
        // Rate-limit codes carry a suffix, e.g.
        // "TOO_MANY_ATTEMPTS_TRY_LATER : please try again later".
        let code = code.split(':').next().unwrap_or(code).trim();
        match code {
            "INVALID_LOGIN_CREDENTIALS" => Self::InvalidCredential,
            "EMAIL_NOT_FOUND" | "USER_NOT_FOUND" => Self::UserNotFound,
            "INVALID_PASSWORD" => Self::WrongPassword,
            "INVALID_EMAIL" => Self::InvalidEmail,
            "USER_DISABLED" => Self::UserDisabled,
            "TOO_MANY_ATTEMPTS_TRY_LATER" => Self::TooManyRequests,
            "EMAIL_EXISTS" => Self::EmailAlreadyInUse,
            "WEAK_PASSWORD" => Self::WeakPassword,
            "MISSING_EMAIL" => Self::MissingEmail,
            "INVALID_OOB_CODE" | "EXPIRED_OOB_CODE" => Self::InvalidResetCode,
            "OPERATION_NOT_ALLOWED" => Self::OperationNotAllowed,
            other => Self::Unexpected(other.to_string()),
        }
    }

    /// Fixed user-facing message for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidCredential => "Invalid email or password.",
            Self::UserNotFound => "No account found with this email.",
            Self::WrongPassword => "Incorrect password.",
            Self::InvalidEmail => "Please enter a valid email address.",
            Self::UserDisabled => "This account has been disabled.",
            Self::TooManyRequests => "Too many attempts. Please try again later.",
            Self::Network(_) => "Network error. Please check your connection.",
            Self::EmailAlreadyInUse => "An account with this email already exists.",
            Self::WeakPassword => "Password must be at least 6 characters long",
            Self::MissingEmail => "Please enter your email address.",
            Self::InvalidResetCode => "The reset link is invalid or has expired.",
            Self::OperationNotAllowed => "This sign-in method is not enabled.",
            Self::Unexpected(_) => "An unexpected error occurred. Please try again.",
        }
    }
}
