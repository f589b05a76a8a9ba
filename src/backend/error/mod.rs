//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Error Types
//!
//! - `HandlerError` - Request-level failures with an explicit status code
//! - `Config` - Invalid server configuration
//! - `Seed` - Unreadable or invalid user seed file
//! - `Database` - PostgreSQL connection or query failures
//! - `Hashing` - bcrypt failures during startup
//!
//! GraphQL failures never go through this type; the `login` resolver
//! reports them inside the GraphQL response body.
//!
//! # HTTP Response Conversion
//!
//! `BackendError` implements `IntoResponse`, producing a JSON body with the
//! error message and status code.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
