//! Backend Module
//!
//! This module contains all server-side code for loginflow. It provides an
//! Axum HTTP server hosting a GraphQL schema with a single `login` mutation
//! that checks an email/password pair against a bcrypt hash.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`graphql`** - async-graphql schema, `login` resolver, output types
//! - **`auth`** - User records, user stores, seed files, credential checks
//! - **`error`** - Backend error type and its HTTP response conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Config, state and initialization
//! ├── routes/         - Route configuration
//! ├── graphql/        - Schema, resolvers and GraphQL types
//! ├── auth/           - Users, stores and credential verification
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! 1. `POST /graphql` reaches the async-graphql handler
//! 2. The `login` resolver validates the form (`shared::login::LoginForm`)
//! 3. `Authenticator` looks the user up by email and runs `bcrypt::verify`
//! 4. The user comes back without any password material, or the request
//!    fails with the generic "Usuário ou senha inválidos" error
//!
//! # Thread Safety
//!
//! The user store is either an immutable in-memory map behind `Arc` or a
//! sqlx `PgPool`; both are cheap to clone into every request. bcrypt work
//! runs on the blocking thread pool so it never stalls the async workers.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// GraphQL schema and resolvers
pub mod graphql;

/// User records and credential verification
pub mod auth;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::init::{build_app, create_app};
pub use auth::{Authenticator, CredentialError, User, UserStore};
pub use graphql::{build_schema, LoginSchema};
pub use error::BackendError;
