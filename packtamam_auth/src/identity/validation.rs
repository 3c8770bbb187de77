//! Local input validation, run before any network call so malformed input
//! never reaches the provider.

use super::errors::IdentityError;

const MIN_PASSWORD_LEN: usize = 6;

/// Result of a password check, with the fixed message the UI displays on
/// failure.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordCheck {
    pub is_valid: bool,
    pub message: Option<&'static str>,
}

/// `local@domain.tld` with no embedded whitespace: exactly one `@`, a
/// non-empty local part, and a domain containing at least one dot with
/// non-empty labels on both sides.
pub fn validate_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((name, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !name.is_empty() && !tld.is_empty() && domain.split('.').all(|label| !label.is_empty())
}

pub fn validate_password(password: &str) -> PasswordCheck {
    if password.chars().count() < MIN_PASSWORD_LEN {
        PasswordCheck {
            is_valid: false,
            message: Some("Password must be at least 6 characters long"),
        }
    } else {
        PasswordCheck {
            is_valid: true,
            message: None,
        }
    }
}

/// Validate a sign-in/sign-up pair, mapping failures onto the provider
/// error taxonomy so callers see one error type.
pub(crate) fn check_credentials(email: &str, password: &str) -> Result<(), IdentityError> {
    if email.is_empty() {
        return Err(IdentityError::MissingEmail);
    }
    if !validate_email(email) {
        return Err(IdentityError::InvalidEmail);
    }
    if !validate_password(password).is_valid {
        return Err(IdentityError::WeakPassword);
    }
    Ok(())
}
