//! Shared harness for integration tests: one stubbed identity provider, one
//! stubbed PackTamam backend, and a fully wired `AuthStack` between them.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use packtamam_auth::{AuthStack, IdentityConfig, MemoryCredentialBackend, SessionExpiredHook};

pub const ADMIN_EMAIL: &str = "admin@packtamam.com";
pub const ADMIN_PASSWORD: &str = "secret1";
pub const ADMIN_UID: &str = "u1";
pub const ADMIN_TOKEN: &str = "tok123";

pub struct TestHarness {
    pub identity: MockServer,
    pub backend: MockServer,
    pub stack: AuthStack,
    /// How many times the session-expired hook has fired.
    pub redirects: Arc<AtomicUsize>,
}

impl TestHarness {
    pub async fn start() -> Self {
        let identity = MockServer::start().await;
        let backend = MockServer::start().await;

        let redirects = Arc::new(AtomicUsize::new(0));
        let counter = redirects.clone();
        let hook: SessionExpiredHook = Arc::new(move |route: &str| {
            assert_eq!(route, "/login");
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let stack = AuthStack::new(
            IdentityConfig::new(identity.uri(), "test-key"),
            &backend.uri(),
            MemoryCredentialBackend::new(),
            hook,
        )
        .expect("test harness must construct");

        Self {
            identity,
            backend,
            stack,
            redirects,
        }
    }

    pub fn redirect_count(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }

    /// Stub a successful password sign-in for the fixture admin account.
    pub async fn mount_sign_in_ok(&self) {
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "localId": ADMIN_UID,
                "email": ADMIN_EMAIL,
                "displayName": "Admin",
                "idToken": ADMIN_TOKEN,
                "refreshToken": "refresh123",
                "expiresIn": "3600"
            })))
            .mount(&self.identity)
            .await;
    }

    /// Stub a sign-in rejection with the given provider error code.
    pub async fn mount_sign_in_error(&self, code: &str) {
        Mock::given(method("POST"))
            .and(path("/v1/accounts:signInWithPassword"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": {"message": code}})),
            )
            .mount(&self.identity)
            .await;
    }

    pub async fn mount_revoke(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/v1/token:revoke"))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({})))
            .mount(&self.identity)
            .await;
    }

    /// Sign the fixture admin in end to end.
    pub async fn sign_in(&self) {
        self.mount_sign_in_ok().await;
        self.stack
            .bridge
            .admin_login(ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("fixture sign-in must succeed");
    }
}
