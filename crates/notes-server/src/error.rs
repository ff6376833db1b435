//! API error types with JSON responses.
//!
//! All handler failures funnel through [`ApiError`]; only this module
//! decides HTTP status codes and payload shapes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use notes_store::StoreError;

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Identifier in the request path or body has an invalid shape (400).
    #[error("malformatted id")]
    MalformedId,

    /// Note creation referenced a missing or unknown user (400).
    #[error("userId missing or not valid")]
    InvalidUserId,

    /// Schema validation rejected the data (400).
    #[error("{0}")]
    Validation(String),

    /// Username already taken (400).
    #[error("expected `username` to be unique")]
    DuplicateUsername,

    /// Entity not found (404, empty body).
    #[error("not found")]
    NotFound,

    /// Unclassified failure (500, empty body).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedId => StatusCode::BAD_REQUEST,
            Self::InvalidUserId => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::DuplicateUsername => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    /// Exhaustive translation of the storage layer's closed error
    /// enumeration. No wildcard arm: a new store variant must be given
    /// an HTTP meaning here before the crate compiles.
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedId(_) => ApiError::MalformedId,
            StoreError::NoteNotFound(_) => ApiError::NotFound,
            StoreError::UserNotFound(_) => ApiError::InvalidUserId,
            StoreError::DuplicateUsername => ApiError::DuplicateUsername,
            StoreError::Validation(message) => ApiError::Validation(message),
            StoreError::Connection(e) => ApiError::Internal(e.to_string()),
            StoreError::Migration(message) => ApiError::Internal(message),
            StoreError::Config(message) => ApiError::Internal(message),
        }
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

/// Body for malformed identifier errors.
///
/// Clients of the original API expect the key `err` here, unlike every
/// other error payload.
#[derive(Debug, Serialize)]
pub struct MalformedIdBody {
    pub err: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // A plain miss is not a failure; everything else is logged here,
        // the one place all errors pass through.
        if !matches!(self, ApiError::NotFound) {
            tracing::error!(error = %self, "request failed");
        }

        let status = self.status_code();
        match self {
            ApiError::MalformedId => (
                status,
                Json(MalformedIdBody {
                    err: "malformatted id".to_string(),
                }),
            )
                .into_response(),
            ApiError::NotFound | ApiError::Internal(_) => status.into_response(),
            other => (
                status,
                Json(ErrorBody {
                    error: other.to_string(),
                }),
            )
                .into_response(),
        }
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    async fn body_of(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn test_malformed_id_uses_err_key() {
        let response = ApiError::MalformedId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, br#"{"err":"malformatted id"}"#);
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let response = ApiError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_invalid_user_id_payload() {
        let response = ApiError::InvalidUserId.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            br#"{"error":"userId missing or not valid"}"#
        );
    }

    #[tokio::test]
    async fn test_duplicate_username_payload() {
        let response = ApiError::DuplicateUsername.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            br#"{"error":"expected `username` to be unique"}"#
        );
    }

    #[tokio::test]
    async fn test_validation_carries_store_message() {
        let response =
            ApiError::Validation("null value in column \"content\"".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value =
            serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body["error"], "null value in column \"content\"");
    }

    #[tokio::test]
    async fn test_internal_has_empty_body() {
        let response = ApiError::Internal("pool closed".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_of(response).await.is_empty());
    }

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err: ApiError = StoreError::NoteNotFound(Uuid::nil()).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_malformed_id_maps_to_400() {
        let err: ApiError = StoreError::MalformedId("xyz".to_string()).into();
        assert!(matches!(err, ApiError::MalformedId));
    }

    #[test]
    fn test_store_user_not_found_maps_to_invalid_user() {
        let err: ApiError = StoreError::UserNotFound(Uuid::nil()).into();
        assert!(matches!(err, ApiError::InvalidUserId));
    }

    #[test]
    fn test_store_duplicate_maps_through() {
        let err: ApiError = StoreError::DuplicateUsername.into();
        assert!(matches!(err, ApiError::DuplicateUsername));
    }
}
