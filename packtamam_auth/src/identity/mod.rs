mod config;
mod errors;
mod main;
mod types;
mod validation;

pub use config::{IDENTITY_API_BASE_URL, IDENTITY_API_KEY, IdentityConfig};
pub use errors::IdentityError;
pub use main::IdentityProvider;
pub use types::{Identity, SignedIn};
pub use validation::{PasswordCheck, validate_email, validate_password};
