//! Shared Module
//!
//! This module contains types that are shared between the egui client and
//! the backend. Everything here is platform-agnostic and serializable, so the
//! same login form validation runs on both sides of the wire.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Login form and its validation rules
pub mod login;

/// GraphQL request/response envelopes and operation documents
pub mod graphql;

/// User-facing message strings
pub mod messages;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use login::LoginForm;
pub use graphql::{GraphQlRequest, GraphQlResponse, GraphQlError, LOGIN_MUTATION};
