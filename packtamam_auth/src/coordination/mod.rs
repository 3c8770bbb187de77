//! Sign-out coordination module
//!
//! High-level orchestration across the identity provider and the credential
//! store. The session bridge handles the happy-path login/logout calls; this
//! module owns the user-facing sign-out sequence with its in-flight guard
//! and per-sub-step diagnostics.

mod errors;
mod logout;

pub use errors::CoordinationError;
pub use logout::{LogoutOrchestrator, LogoutReport};
