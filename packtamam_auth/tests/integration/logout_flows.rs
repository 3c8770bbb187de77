//! Sign-out flows through the orchestrator: clean runs, degraded runs, and
//! the state the rest of the stack observes afterwards.

use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::TestHarness;

#[tokio::test]
async fn test_clean_sign_out_leaves_no_trace() {
    // Given a signed-in admin and a healthy provider
    let harness = TestHarness::start().await;
    harness.sign_in().await;
    harness.mount_revoke(200).await;

    // When signing out through the orchestrator
    let report = harness.stack.logout.sign_out().await.unwrap();

    // Then both sub-steps succeeded and every component agrees
    assert!(report.is_clean());
    assert_eq!(report.message, None);
    assert!(!harness.stack.bridge.is_authenticated());
    assert!(!harness.stack.provider.is_authenticated());
    assert_eq!(harness.stack.store.get_session_token(), None);
    assert_eq!(harness.stack.store.get_identity_credential().uid, None);
    assert_eq!(harness.stack.store.get_profile().email, None);
}

#[tokio::test]
async fn test_unreachable_provider_still_signs_out_locally() {
    let harness = TestHarness::start().await;
    harness.sign_in().await;
    harness.mount_revoke(503).await;

    let report = harness.stack.logout.sign_out().await.unwrap();

    // Remote revocation failed, but the local end state is signed out
    assert!(!report.provider_signed_out);
    assert!(report.credentials_cleared);
    assert!(report.message.as_deref().is_some_and(|m| !m.is_empty()));
    assert!(!harness.stack.bridge.is_authenticated());
    assert_eq!(harness.stack.store.get_session_token(), None);
}

#[tokio::test]
async fn test_sign_out_then_sign_in_again() {
    // A fresh login after sign-out repopulates the same stack
    let harness = TestHarness::start().await;
    harness.sign_in().await;
    harness.mount_revoke(200).await;
    harness.stack.logout.sign_out().await.unwrap();
    assert!(!harness.stack.bridge.is_authenticated());

    harness.sign_in().await;

    assert!(harness.stack.bridge.is_authenticated());
    assert!(harness.stack.store.get_session_token().is_some());
}

#[tokio::test]
async fn test_sign_out_without_session_still_clears() {
    // Signing out while nobody is signed in is a clean no-op: nothing to
    // revoke remotely, and the store ends up verifiably empty.
    let harness = TestHarness::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/token:revoke"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&harness.identity)
        .await;

    let report = harness.stack.logout.sign_out().await.unwrap();

    assert!(report.is_clean());
    assert_eq!(harness.stack.store.get_session_token(), None);
    harness.identity.verify().await;
}
