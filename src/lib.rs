//! loginflow - Main Library
//!
//! loginflow is a small email/password login demo: a native egui client
//! submits credentials to a GraphQL `login` mutation served by an Axum
//! backend, which checks them against a bcrypt hash.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between client and backend
//!   - Login form validation, GraphQL request/response envelopes
//!   - Configuration builder and error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server hosting the GraphQL schema
//!   - Credential verification and user stores (memory or PostgreSQL)
//!
//! - **`egui_app`** - Native desktop app (egui/eframe)
//!   - Login and welcome screens
//!   - Toast notifications with auto-dismiss
//!   - Blocking GraphQL client
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend module and its server-only
//!   dependencies (axum, async-graphql, sqlx, bcrypt).
//!
//! # Usage
//!
//! ## Server-Side
//!
//! ```rust,no_run
//! use loginflow::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! ## Native Desktop App
//!
//! ```text
//! cargo run --bin egui_app
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` with `?` propagation everywhere outside tests
//! - `thiserror` enums per layer: `shared::error`, `backend::error`,
//!   `backend::auth::CredentialError`, `egui_app::auth::ClientError`

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
