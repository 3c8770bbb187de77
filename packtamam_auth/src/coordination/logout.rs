use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::credentials::CredentialStore;
use crate::identity::IdentityProvider;

use super::errors::CoordinationError;

/// Per-sub-step outcome of a sign-out run.
///
/// Whatever the individual outcomes, the run always ends with the local
/// credential state torn down, so the caller can treat the user as signed
/// out and use the report only for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct LogoutReport {
    /// Whether the identity provider acknowledged the remote revocation.
    pub provider_signed_out: bool,
    /// Whether every credential domain was cleared locally.
    pub credentials_cleared: bool,
    /// Human-readable summary of what, if anything, went wrong.
    pub message: Option<String>,
}

impl LogoutReport {
    pub fn is_clean(&self) -> bool {
        self.provider_signed_out && self.credentials_cleared
    }
}

/// Drives the full sign-out sequence: remote revocation at the identity
/// provider, then unconditional local credential clearing.
///
/// Only one run may be in flight at a time; a second call while one is
/// pending is rejected rather than queued, so a double-clicked sign-out
/// button cannot interleave two teardowns.
pub struct LogoutOrchestrator {
    provider: Arc<IdentityProvider>,
    store: Arc<CredentialStore>,
    in_flight: AtomicBool,
}

impl LogoutOrchestrator {
    pub fn new(provider: Arc<IdentityProvider>, store: Arc<CredentialStore>) -> Self {
        Self {
            provider,
            store,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Run the sign-out sequence.
    ///
    /// Returns `Err(CoordinationError::LogoutInFlight)` when a run is
    /// already pending. Otherwise always returns a report: sub-step
    /// failures are recorded, never propagated, because the user must end
    /// up signed out locally regardless of what the network does.
    pub async fn sign_out(&self) -> Result<LogoutReport, CoordinationError> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(CoordinationError::LogoutInFlight.log());
        }

        let report = self.run().await;
        self.in_flight.store(false, Ordering::Release);
        Ok(report)
    }

    async fn run(&self) -> LogoutReport {
        tracing::debug!("Starting sign-out sequence");

        let provider_signed_out = match self.provider.sign_out().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Provider sign-out failed: {}", e);
                false
            }
        };

        // Clearing runs regardless of the provider outcome.
        let credentials_cleared = self.store.clear_all();
        if !credentials_cleared {
            tracing::warn!("Credential clearing reported failure during sign-out");
        }

        let message = match (provider_signed_out, credentials_cleared) {
            (true, true) => None,
            (false, true) => Some(
                "Signed out locally, but the identity provider could not be reached.".to_string(),
            ),
            (true, false) => {
                Some("Signed out, but some stored credentials could not be removed.".to_string())
            }
            (false, false) => Some(
                "Sign-out encountered errors; please close the application to be safe."
                    .to_string(),
            ),
        };

        if let Some(msg) = &message {
            tracing::warn!("Sign-out finished with issues: {}", msg);
        } else {
            tracing::debug!("Sign-out sequence completed cleanly");
        }

        LogoutReport {
            provider_signed_out,
            credentials_cleared,
            message,
        }
    }
}
