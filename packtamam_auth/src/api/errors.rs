use thiserror::Error;

/// Normalized backend API failures, classified by the interceptor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApiError {
    /// The backend rejected the bearer credential. Session state has
    /// already been torn down by the time this error is returned.
    #[error("Session expired. Please login again.")]
    SessionExpired,

    /// No response was received (connection failure or the 10 s timeout).
    /// Credentials are untouched.
    #[error("Network error. Please check your connection.")]
    Network,

    /// 5xx from the backend, preserving its message when it sent one.
    #[error("{0}")]
    Server(String),

    /// Any other non-success status, passed through unmodified.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Request construction failed (bad path joined onto the base URL).
    #[error("Invalid request url: {0}")]
    Url(String),
}

pub(crate) const GENERIC_SERVER_ERROR: &str = "Server error. Please try again later.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_sync_and_send() {
        fn assert_sync_send<T: Sync + Send>() {}
        assert_sync_send::<ApiError>();
    }

    #[test]
    fn test_normalized_messages() {
        assert_eq!(
            ApiError::SessionExpired.to_string(),
            "Session expired. Please login again."
        );
        assert_eq!(
            ApiError::Network.to_string(),
            "Network error. Please check your connection."
        );
        assert_eq!(
            ApiError::Server("backend says no".to_string()).to_string(),
            "backend says no"
        );
        assert_eq!(
            ApiError::Status {
                status: 404,
                message: "not found".to_string()
            }
            .to_string(),
            "Request failed with status 404: not found"
        );
    }
}
