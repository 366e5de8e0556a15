//! Fetch Errors
//!
//! Every way a collection fetch can fail. Views never show these details:
//! all variants collapse into the same user-facing message.

use thiserror::Error;

/// The only message a list view ever shows for a failed fetch
pub const GENERIC_MESSAGE: &str = "Something went wrong";

/// Errors that can occur while fetching and decoding a collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response (connection refused, DNS, timeout, aborted)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("Server responded with status {status}")]
    Status { status: u16 },

    /// The body was not JSON, or not the expected envelope shape
    #[error("Decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Message shown to the user, identical for every cause
    pub fn user_message(&self) -> &'static str {
        GENERIC_MESSAGE
    }

    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_))
    }

    pub fn is_status(&self) -> bool {
        matches!(self, FetchError::Status { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Result alias for fetch operations
pub type FetchResult<T> = Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cause_has_the_same_user_message() {
        let errors = [
            FetchError::Network("connection refused".to_string()),
            FetchError::Status { status: 404 },
            FetchError::Decode("missing field `Data`".to_string()),
        ];

        for error in &errors {
            assert_eq!(error.user_message(), "Something went wrong");
        }
    }

    #[test]
    fn test_causes_are_distinguishable() {
        assert!(FetchError::Network("x".into()).is_network());
        assert!(FetchError::Status { status: 500 }.is_status());
        assert!(FetchError::Decode("x".into()).is_decode());
        assert!(!FetchError::Status { status: 500 }.is_network());
    }

    #[test]
    fn test_json_errors_become_decode_errors() {
        let err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let fetch_err: FetchError = err.into();
        assert!(fetch_err.is_decode());
    }

    #[test]
    fn test_status_display() {
        let err = FetchError::Status { status: 503 };
        assert_eq!(err.to_string(), "Server responded with status 503");
    }
}
