//! Request-level error type for staffdesk
//!
//! Two variants cover the whole failure taxonomy of this service: the
//! client sent something unusable (400, short fixed message) or a
//! downstream call failed (500, details logged server-side only, never
//! echoed to the client).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required field, or an unrecognized column name
    #[error("{0}")]
    BadRequest(&'static str),
    /// Database or serialization failure (auto-logged, fixed client message)
    #[error("internal error")]
    Internal(#[source] BoxError),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal(e.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
            }
        }
    }
}

/// Convenience alias for handler return types
pub type ApiResult<T> = Result<T, ApiError>;
