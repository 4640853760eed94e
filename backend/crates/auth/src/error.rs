//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// All token-path failures (missing, malformed, bad signature, expired,
/// unknown subject) surface as 401. Expired and invalid tokens carry the
/// same external message so callers cannot distinguish the cases.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No bearer credential on the request
    #[error("No authentication token provided")]
    TokenMissing,

    /// Token malformed or signature mismatch
    #[error("Invalid authentication token")]
    TokenInvalid,

    /// Token past its expiry (externally indistinguishable from invalid)
    #[error("Invalid authentication token")]
    TokenExpired,

    /// Token subject does not resolve to a stored identity
    #[error("User not found")]
    UnknownSubject,

    /// Wrong identifier/password combination
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Username already registered
    #[error("Username already taken")]
    UsernameTaken,

    /// Email already registered
    #[error("Email already registered")]
    EmailTaken,

    /// One or more field constraints violated
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::TokenMissing
            | AuthError::TokenInvalid
            | AuthError::TokenExpired
            | AuthError::UnknownSubject
            | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::UsernameTaken | AuthError::EmailTaken => StatusCode::CONFLICT,
            AuthError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::TokenMissing
            | AuthError::TokenInvalid
            | AuthError::TokenExpired
            | AuthError::UnknownSubject
            | AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::UsernameTaken | AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::Validation(_) => ErrorKind::UnprocessableEntity,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            // sqlx errors get the fine-grained 500/503 mapping from kernel
            AuthError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::TokenExpired => {
                tracing::debug!("Expired token presented");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
