//! Error normalization - every failure leaves as a `{ "error": ... }` body.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

use bloglist_core::error::{DomainError, RepoError};
use bloglist_core::ports::AuthError;
use bloglist_shared::ErrorResponse;

/// Application-level error type for the handlers.
#[derive(Debug)]
pub enum ApiError {
    /// Path id that does not parse as an ObjectId.
    MalformedId,
    /// Validation failure; the message reaches the client verbatim.
    Validation(String),
    /// Ownership check failed on a mutation.
    Unauthorized,
    /// Login with a bad username or password.
    InvalidCredentials,
    /// Anything unrecognized; the detail is logged, never sent.
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MalformedId => write!(f, "malformatted id"),
            ApiError::Validation(msg) => write!(f, "{}", msg),
            ApiError::Unauthorized => write!(f, "unauthorized operation"),
            ApiError::InvalidCredentials => write!(f, "invalid username or password"),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedId => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ApiError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::new("internal server error")
            }
            other => ErrorResponse::new(other.to_string()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

// Conversions from the inner error types.
impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => ApiError::Validation(msg),
        }
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            // Uniqueness violations carry a client-facing message.
            RepoError::Constraint(msg) => ApiError::Validation(msg),
            RepoError::Connection(msg) | RepoError::Query(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;
