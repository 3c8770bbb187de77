use thiserror::Error;

/// Errors raised by credential backends.
///
/// These never cross the `CredentialStore` surface: the store logs them and
/// reports boolean failure, since callers of the store must not have to
/// handle persistence exceptions.
#[derive(Debug, Error, Clone)]
pub enum CredentialError {
    #[error("Io error: {0}")]
    Io(String),

    #[error("Serde error: {0}")]
    Serde(String),

    #[error("Lock error: {0}")]
    Lock(String),
}
