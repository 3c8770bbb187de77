//! Command-line walkthrough of the PackTamam auth stack: sign in, fetch a
//! protected resource, sign out.
//!
//! Expects `IDENTITY_API_BASE_URL`, `IDENTITY_API_KEY` and `API_BASE_URL`
//! in the environment (or a `.env` file), plus `DEMO_EMAIL`/`DEMO_PASSWORD`
//! for the account to sign in with.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use packtamam_auth::{AuthStack, FileCredentialBackend, SessionExpiredHook};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "demo_admin=debug,packtamam_auth=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let email = std::env::var("DEMO_EMAIL")?;
    let password = std::env::var("DEMO_PASSWORD")?;

    // In a desktop shell this hook would swap the window to the login view;
    // here it just reports where the user would land.
    let hook: SessionExpiredHook = Arc::new(|route: &str| {
        tracing::warn!("Session expired, navigate to {}", route);
    });

    let credentials_path = std::env::temp_dir().join("packtamam-demo-credentials.json");
    let stack = AuthStack::from_env(FileCredentialBackend::new(&credentials_path), hook)?;

    tracing::info!("Signing in as {}", email);
    let login = stack.bridge.admin_login(&email, &password).await?;
    tracing::info!("Signed in with uid {}", login.uid);

    let orders: serde_json::Value = stack.api.get_json("/admin/orders").await?;
    tracing::info!("Fetched {} via the authenticated client", orders);

    let report = stack.logout.sign_out().await?;
    match report.message {
        None => tracing::info!("Signed out cleanly"),
        Some(message) => tracing::warn!("Signed out with issues: {}", message),
    }

    Ok(())
}
