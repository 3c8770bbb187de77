mod backend;
mod config;
mod errors;
mod store;
mod types;

pub use backend::{CredentialBackend, FileCredentialBackend, MemoryCredentialBackend};
pub use config::{SESSION_TOKEN_MAX_AGE, SESSION_TOKEN_SECURE};
pub use errors::CredentialError;
pub use store::CredentialStore;
pub use types::{IdentityCredential, Profile, SameSite, SessionTokenOptions, StoredValue};
