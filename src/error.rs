// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

/// Errors surfaced to HTTP callers.
///
/// The external contract is deliberately coarse: callers can tell
/// "not authorized" apart from "something failed", and nothing more.
/// Underlying causes are logged at the point of failure, never leaked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    // 401 Unauthorized
    Unauthorized,

    // 500 Internal Server Error, one fixed message per endpoint
    FetchFailed,
    CreateFailed,
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::FetchFailed | ApiError::CreateFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "Unauthorized",
            ApiError::FetchFailed => "Failed to fetch posts",
            ApiError::CreateFailed => "Failed to create post",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        json!({ "error": self.message() })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_contract() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::FetchFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::CreateFailed.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn body_is_bare_error_object() {
        assert_eq!(
            ApiError::Unauthorized.to_json(),
            json!({ "error": "Unauthorized" })
        );
        assert_eq!(
            ApiError::FetchFailed.to_json(),
            json!({ "error": "Failed to fetch posts" })
        );
        assert_eq!(
            ApiError::CreateFailed.to_json(),
            json!({ "error": "Failed to create post" })
        );
    }
}
