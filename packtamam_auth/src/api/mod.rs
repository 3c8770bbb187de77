mod client;
mod config;
mod errors;

pub use client::{ApiClient, SessionExpiredHook};
pub use config::{API_BASE_URL, LOGIN_ROUTE};
pub use errors::ApiError;
