use std::env;
use std::sync::LazyLock;
use std::time::Duration;

/// Fixed timeout applied uniformly to every backend request. Exceeding it
/// is classified as the no-response branch.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Base URL of the PackTamam admin backend.
pub static API_BASE_URL: LazyLock<String> =
    LazyLock::new(|| env::var("API_BASE_URL").expect("API_BASE_URL must be set"));

/// Client-side route the session-expired hook receives on 401 teardown.
pub static LOGIN_ROUTE: LazyLock<String> =
    LazyLock::new(|| env::var("LOGIN_ROUTE").ok().unwrap_or("/login".to_string()));
