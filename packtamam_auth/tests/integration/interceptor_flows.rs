//! Interceptor behavior across a live session: bearer attachment, 401
//! teardown, and error normalization as seen through the wired stack.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use packtamam_auth::ApiError;

use crate::common::TestHarness;

#[tokio::test]
async fn test_expired_session_tears_down_everything_once() {
    // Given a signed-in admin whose token the backend stopped accepting
    let harness = TestHarness::start().await;
    harness.sign_in().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&harness.backend)
        .await;

    // When the next protected request comes back 401
    let err = harness
        .stack
        .api
        .get_json::<serde_json::Value>("/admin/orders")
        .await
        .unwrap_err();

    // Then every credential domain is empty before the caller sees the error
    assert_eq!(err, ApiError::SessionExpired);
    assert_eq!(harness.stack.store.get_session_token(), None);
    assert_eq!(harness.stack.store.get_identity_credential().uid, None);
    assert_eq!(harness.stack.store.get_identity_credential().token, None);
    assert_eq!(harness.redirect_count(), 1);
}

#[tokio::test]
async fn test_each_401_response_fires_the_hook_once() {
    let harness = TestHarness::start().await;
    harness.sign_in().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&harness.backend)
        .await;

    // Two independent failing requests produce one hook call each; neither
    // request observes a partially cleared store.
    for expected in 1..=2 {
        let err = harness
            .stack
            .api
            .get_json::<serde_json::Value>("/admin/orders")
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::SessionExpired);
        assert_eq!(harness.redirect_count(), expected);
    }
}

#[tokio::test]
async fn test_server_errors_do_not_touch_the_session() {
    let harness = TestHarness::start().await;
    harness.sign_in().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "maintenance"})))
        .mount(&harness.backend)
        .await;

    let err = harness
        .stack
        .api
        .get_json::<serde_json::Value>("/admin/orders")
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Server("maintenance".to_string()));
    // The session survives backend trouble
    assert!(harness.stack.store.get_session_token().is_some());
    assert_eq!(harness.redirect_count(), 0);
}

#[tokio::test]
async fn test_requests_after_teardown_go_out_unauthenticated() {
    // Given a 401 already tore the session down
    let harness = TestHarness::start().await;
    harness.sign_in().await;
    Mock::given(method("GET"))
        .and(path("/admin/orders"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&harness.backend)
        .await;
    let _ = harness
        .stack
        .api
        .get_json::<serde_json::Value>("/admin/orders")
        .await;

    Mock::given(method("GET"))
        .and(path("/public/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"menu": []})))
        .mount(&harness.backend)
        .await;

    // When a public request follows
    let menu: serde_json::Value = harness.stack.api.get_json("/public/menu").await.unwrap();

    // Then it succeeds without a bearer token
    assert_eq!(menu, json!({"menu": []}));
    assert_eq!(harness.stack.store.get_session_token(), None);
}
