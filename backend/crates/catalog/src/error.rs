//! Catalog Error Types
//!
//! Catalog-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Catalog-specific result type alias
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-specific error variants
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Card id does not resolve
    #[error("Card not found")]
    CardNotFound,

    /// Deck id does not resolve
    #[error("Deck not found")]
    DeckNotFound,

    /// Caller is not the owner of the resource
    ///
    /// `action` is the verb attempted ("update", "delete", "modify"),
    /// `resource` the noun ("card", "deck").
    #[error("Not authorized to {action} this {resource}")]
    NotOwner {
        action: &'static str,
        resource: &'static str,
    },

    /// One or more field constraints violated
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Concurrent writers kept invalidating the read-modify-write cycle
    #[error("Deck was modified concurrently, please retry")]
    VersionConflict,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::CardNotFound | CatalogError::DeckNotFound => StatusCode::NOT_FOUND,
            CatalogError::NotOwner { .. } => StatusCode::FORBIDDEN,
            CatalogError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CatalogError::VersionConflict => StatusCode::CONFLICT,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::CardNotFound | CatalogError::DeckNotFound => ErrorKind::NotFound,
            CatalogError::NotOwner { .. } => ErrorKind::Forbidden,
            CatalogError::Validation(_) => ErrorKind::UnprocessableEntity,
            CatalogError::VersionConflict => ErrorKind::Conflict,
            CatalogError::Database(_) | CatalogError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            // sqlx errors get the fine-grained 500/503 mapping from kernel
            CatalogError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CatalogError::Database(e) => {
                tracing::error!(error = %e, "Catalog database error");
            }
            CatalogError::Internal(msg) => {
                tracing::error!(message = %msg, "Catalog internal error");
            }
            CatalogError::VersionConflict => {
                tracing::warn!("Deck update lost the version race");
            }
            CatalogError::NotOwner { action, resource } => {
                tracing::warn!(action, resource, "Ownership check failed");
            }
            _ => {
                tracing::debug!(error = %self, "Catalog error");
            }
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
