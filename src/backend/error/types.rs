/**
 * Backend Error Types
 *
 * Errors raised while starting the server or serving its plain HTTP
 * endpoints (`/health`, the 404 fallback).
 *
 * # Error Categories
 *
 * ## Startup Errors
 *
 * - Invalid environment configuration
 * - Unreadable seed file
 * - Database connection failures
 *
 * ## Handler Errors
 *
 * - Unknown routes
 * - Unreachable user store
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::seed::SeedError;
use crate::shared::config::ConfigError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use loginflow::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::NOT_FOUND, "Not Found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error with an explicit status code
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Invalid server configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Seed file could not be loaded
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// Database connection or query failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// bcrypt failure outside a login attempt
    #[error("Hashing error: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `Database` - 503 Service Unavailable
    /// - everything else - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Database(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Config(_) | Self::Seed(_) | Self::Hashing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to send to a client
    ///
    /// Only handler errors expose their text; internal failures are
    /// reduced to the status reason.
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            _ => self
                .status_code()
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
        }
    }
}
