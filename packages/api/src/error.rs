//! Error taxonomy for backend calls.

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("not signed in")]
    Unauthorized { message: Option<String> },
    #[error("not allowed")]
    Forbidden { message: Option<String> },
    #[error("not found")]
    NotFound { message: Option<String> },
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

/// Error body shape; the backend uses either field.
#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ApiError {
    /// Classify a non-success response, keeping the backend's explanation.
    pub fn from_response(status: u16, body: &str) -> Self {
        let non_blank = |m: Option<String>| {
            m.map(|m| m.trim().to_string()).filter(|m| !m.is_empty())
        };
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| non_blank(b.error).or_else(|| non_blank(b.message)));
        match status {
            401 => ApiError::Unauthorized { message },
            403 => ApiError::Forbidden { message },
            404 => ApiError::NotFound { message },
            status => ApiError::Status { status, message },
        }
    }

    /// The backend's explanation, if it sent one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Unauthorized { message }
            | ApiError::Forbidden { message }
            | ApiError::NotFound { message }
            | ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for a notification description: the backend's message, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_wins_over_message() {
        let err = ApiError::from_response(400, r#"{"error":"Visitor already checked in","message":"Bad"}"#);
        assert_eq!(
            err,
            ApiError::Status {
                status: 400,
                message: Some("Visitor already checked in".to_string())
            }
        );
        assert_eq!(err.user_message("Failed"), "Visitor already checked in");
    }

    #[test]
    fn test_blank_error_falls_back_to_message() {
        let err = ApiError::from_response(400, r#"{"error":"  ","message":"Bad"}"#);
        assert_eq!(err.server_message(), Some("Bad"));
    }

    #[test]
    fn test_message_field() {
        let err = ApiError::from_response(401, r#"{"success":false,"message":"Invalid credentials"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.server_message(), Some("Invalid credentials"));
    }

    #[test]
    fn test_unparseable_body_uses_fallback() {
        let err = ApiError::from_response(500, "<html>Bad Gateway</html>");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.user_message("Please try again later."), "Please try again later.");
        let err = ApiError::from_response(404, r#"{"error":"  "}"#);
        assert_eq!(err, ApiError::NotFound { message: None });
    }

    #[test]
    fn test_transport_errors_have_no_server_message() {
        assert_eq!(
            ApiError::Network("offline".to_string()).user_message("Try again"),
            "Try again"
        );
    }
}
