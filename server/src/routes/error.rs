//! HTTP Error Responses
//!
//! Maps domain errors onto JSON bodies of the form `{"error": ...}` with
//! the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::domain::DomainError;

/// An error ready to be rendered as an HTTP response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    message: Option<String>,
}

impl ApiError {
    pub fn bad_request(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: error.into(),
            message: None,
        }
    }

    pub fn unauthorized(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: error.into(),
            message: None,
        }
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: error.into(),
            message: None,
        }
    }

    /// 401 used when the Authorization header is absent or malformed
    pub fn missing_authorization() -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            error: "Missing Authorization Header".to_string(),
            message: Some("Request does not contain a valid bearer token".to_string()),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound(msg) => Self::not_found(msg),
            DomainError::InvalidInput(msg) => Self::bad_request(msg),
            DomainError::Conflict(msg) => Self::bad_request(msg),
            DomainError::Unauthorized(msg) => Self::unauthorized(msg),
            DomainError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: "Internal server error".to_string(),
                    message: Some("An unexpected error occurred".to_string()),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.message {
            Some(message) => json!({ "error": self.error, "message": message }),
            None => json!({ "error": self.error }),
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_status_mapping() {
        let resp = ApiError::from(DomainError::NotFound("Todo not found".into())).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError::from(DomainError::InvalidInput("Title is required".into())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = ApiError::from(DomainError::Unauthorized("bad token".into())).into_response();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let resp = ApiError::from(DomainError::Internal("db gone".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
