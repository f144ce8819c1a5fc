//! API Errors
//!
//! Failures surfaced to the user as inline messages.

use serde::Deserialize;

/// Fallback when an error response has no readable body
pub const REQUEST_FAILED: &str = "Request failed";

/// Paths whose 401 means bad credentials rather than an expired session
pub const AUTH_PATH_PREFIX: &str = "/auth/";

/// True when a 401 should drop the session and send the user to `/login`
pub fn ends_session(status: u16, path: &str) -> bool {
    status == 401 && !path.starts_with(AUTH_PATH_PREFIX)
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthorized,

    /// Non-2xx response; `message` is the backend's `detail` when present
    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    NotFound(String),
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl ApiError {
    /// Build from a non-2xx status and its raw body.
    ///
    /// A JSON body with a string `detail` yields that detail, a JSON body
    /// without one yields `HTTP <status>`, anything unparsable yields
    /// "Request failed".
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(ErrorBody { detail: Some(serde_json::Value::String(detail)) }) => detail,
            Ok(_) => format!("HTTP {}", status),
            Err(_) => REQUEST_FAILED.to_string(),
        };
        Self::Http { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_becomes_message() {
        let err = ApiError::from_response(409, r#"{"detail": "Whisky already in wishlist"}"#);
        assert_eq!(err.to_string(), "Whisky already in wishlist");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_missing_detail_falls_back_to_status() {
        assert_eq!(ApiError::from_response(500, "{}").to_string(), "HTTP 500");
        // validation errors carry a list, not a string
        let err = ApiError::from_response(422, r#"{"detail": [{"msg": "field required"}]}"#);
        assert_eq!(err.to_string(), "HTTP 422");
    }

    #[test]
    fn test_only_authenticated_calls_end_the_session() {
        assert!(ends_session(401, "/bottles?limit=100"));
        assert!(ends_session(401, "/profile/taste"));
        assert!(!ends_session(401, "/auth/login"));
        assert!(!ends_session(401, "/auth/register"));
        assert!(!ends_session(403, "/bottles"));
    }

    #[test]
    fn test_bad_credentials_keep_backend_message() {
        let err = ApiError::from_response(401, r#"{"detail": "Invalid email or password"}"#);
        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_unparsable_body() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.to_string(), REQUEST_FAILED);
    }
}
