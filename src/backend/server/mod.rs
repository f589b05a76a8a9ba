//! Server Module
//!
//! This module contains the server-side code for initializing and
//! configuring the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - Application state structure and `FromRef` implementations
//! - **`config`** - Environment configuration and user store selection
//! - **`init`** - Server initialization and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - ServerConfig and store loading
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store Loading**: PostgreSQL pool with migrations, or the seed file
//! 3. **Schema Creation**: GraphQL schema with the authenticator as data
//! 4. **Router Creation**: Routes, tracing and CORS layers
//!
//! # Example
//!
//! ```rust,no_run
//! use loginflow::backend::server::{config::ServerConfig, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::ServerConfig;
pub use init::{build_app, create_app};
pub use state::AppState;
