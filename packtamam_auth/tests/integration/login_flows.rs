//! End-to-end sign-in flows: provider authentication, credential
//! persistence, and first authenticated backend call.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

use packtamam_auth::{IdentityError, SessionError};

use crate::common::{ADMIN_EMAIL, ADMIN_PASSWORD, ADMIN_TOKEN, ADMIN_UID, TestHarness};

#[tokio::test]
async fn test_login_then_authenticated_backend_call() {
    // Given a stubbed provider and a backend requiring the fresh token
    let harness = TestHarness::start().await;
    harness.mount_sign_in_ok().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"orders": []})))
        .expect(1)
        .mount(&harness.backend)
        .await;

    // When logging in and issuing a protected request
    let data = harness
        .stack
        .bridge
        .admin_login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap();
    let orders: serde_json::Value = harness.stack.api.get_json("/admin/orders").await.unwrap();

    // Then the login data, the persisted state and the call all line up
    assert_eq!(data.uid, ADMIN_UID);
    assert_eq!(data.id_token, ADMIN_TOKEN);
    assert_eq!(
        harness.stack.store.get_session_token().as_deref(),
        Some(ADMIN_TOKEN)
    );
    assert_eq!(orders, json!({"orders": []}));
    assert!(harness.stack.bridge.is_authenticated());
    harness.backend.verify().await;
}

#[tokio::test]
async fn test_rejected_credentials_surface_fixed_message() {
    let harness = TestHarness::start().await;
    harness.mount_sign_in_error("INVALID_LOGIN_CREDENTIALS").await;

    let err = harness
        .stack
        .bridge
        .admin_login(ADMIN_EMAIL, "wrong-password")
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Invalid email or password.");
    assert!(!harness.stack.bridge.is_authenticated());
    assert_eq!(harness.stack.store.get_session_token(), None);
}

#[tokio::test]
async fn test_invalid_email_never_reaches_the_provider() {
    // Given a provider that must not be called
    let harness = TestHarness::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&harness.identity)
        .await;

    // When logging in with a malformed email
    let err = harness
        .stack
        .bridge
        .admin_login("not an email", ADMIN_PASSWORD)
        .await
        .unwrap_err();

    // Then validation rejected it locally
    assert!(matches!(
        err,
        SessionError::Identity(IdentityError::InvalidEmail)
    ));
    harness.identity.verify().await;
}

#[tokio::test]
async fn test_short_password_never_reaches_the_provider() {
    let harness = TestHarness::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&harness.identity)
        .await;

    let err = harness
        .stack
        .bridge
        .admin_login(ADMIN_EMAIL, "five5")
        .await
        .unwrap_err();

    assert_eq!(
        err.user_message(),
        "Password must be at least 6 characters long"
    );
    harness.identity.verify().await;
}

#[tokio::test]
async fn test_disabled_account_message() {
    let harness = TestHarness::start().await;
    harness.mount_sign_in_error("USER_DISABLED").await;

    let err = harness
        .stack
        .bridge
        .admin_login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "This account has been disabled.");
}
