//! Transport error taxonomy shared by the API client and loaders.
//!
//! # Design
//! - Keep errors cloneable so they can live in view state.
//! - Carry the server's `message` when one was returned; callers choose the fallback copy.

use thiserror::Error;
use tubestream_api_models::ErrorBody;

/// Failure of a remote API call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network request failed: {0}")]
    Network(String),
    /// The service answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Server-provided `message`, when the body carried one.
        message: Option<String>,
    },
    /// The response body did not match the expected shape.
    #[error("response decoding failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// Build a status error from a raw response body, extracting the JSON `message` field.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.message)
            .map(|message| message.trim().to_string())
            .filter(|message| !message.is_empty());
        Self::Status { status, message }
    }

    /// Whether the service reported the resource as missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }

    /// The server message when present, otherwise `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn from_status_extracts_message() {
        let err = ApiError::from_status(400, r#"{"message":"Email already in use"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: Some("Email already in use".to_string())
            }
        );
        assert_eq!(err.user_message("Registration failed"), "Email already in use");
    }

    #[test]
    fn from_status_ignores_non_json_and_blank_bodies() {
        let html = ApiError::from_status(502, "<html>bad gateway</html>");
        assert_eq!(html.user_message("Login failed"), "Login failed");
        let blank = ApiError::from_status(400, r#"{"message":"   "}"#);
        assert_eq!(blank.user_message("Login failed"), "Login failed");
    }

    #[test]
    fn network_and_decode_errors_use_fallback() {
        assert_eq!(
            ApiError::Network("offline".into()).user_message("Try again"),
            "Try again"
        );
        assert_eq!(
            ApiError::Decode("eof".into()).user_message("Try again"),
            "Try again"
        );
    }

    #[test]
    fn not_found_detection() {
        assert!(ApiError::from_status(404, "").is_not_found());
        assert!(!ApiError::from_status(500, "").is_not_found());
        assert!(!ApiError::Network("x".into()).is_not_found());
    }
}
