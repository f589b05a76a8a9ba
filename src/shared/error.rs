//! Shared Error Types
//!
//! This module defines error types that are shared between the client and
//! the backend.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - Login form validation failures
//!
//! # Usage
//!
//! ```rust
//! use loginflow::shared::error::SharedError;
//!
//! let error = SharedError::validation(vec!["email".to_string()], "email must be a valid address");
//! assert_eq!(error.fields(), ["email".to_string()]);
//! ```
use thiserror::Error;
use validator::ValidationErrors;

/// Shared error types that can occur in both client and backend
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Form validation error
    #[error("Validation error in {}: {message}", fields.join(", "))]
    ValidationError {
        /// The fields that failed validation, sorted
        fields: Vec<String>,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(fields: Vec<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            fields,
            message: message.into(),
        }
    }

    /// Fields that failed validation; empty for other error kinds.
    pub fn fields(&self) -> &[String] {
        match self {
            Self::ValidationError { fields, .. } => fields,
            Self::SerializationError { .. } => &[],
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();
        let mut fields: Vec<String> = field_errors.keys().map(|f| f.to_string()).collect();
        fields.sort();

        // First message of the first field (sorted) keeps the text stable.
        let message = fields
            .first()
            .and_then(|field| field_errors.get(field.as_str()))
            .and_then(|errs| errs.first())
            .and_then(|err| err.message.as_ref())
            .map(|m| m.to_string())
            .unwrap_or_else(|| "invalid input".to_string());

        Self::validation(fields, message)
    }
}
