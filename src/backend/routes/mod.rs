//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - GraphQL and health handlers
//! ```
//!
//! # Routes
//!
//! - `POST /graphql` - GraphQL endpoint (`login` mutation, `apiVersion` query)
//! - `GET /graphql` - GraphiQL explorer
//! - `GET /health` - Health check
//!
//! Everything else returns a JSON 404.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
