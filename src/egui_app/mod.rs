//! egui Native Desktop Client Module
//!
//! A native desktop login client built with egui/eframe that talks to the
//! GraphQL server.
//!
//! # Architecture
//!
//! - **`config`** - Server URL configuration
//! - **`auth`** - `AuthClient` trait and the GraphQL implementation
//! - **`types`** - Response payload types
//! - **`flow`** - The Login/Welcome state machine
//! - **`toast`** - Self-expiring notifications
//! - **`state`** - `AppState`, which owns the flow and the worker channel
//! - **`views`** - egui rendering for each screen and the toast
//! - **`theme`** - Colors and frame styles
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Application entry point (binary)
//! ├── config.rs       - Configuration management
//! ├── auth.rs         - Login client
//! ├── types.rs        - Shared types
//! ├── flow.rs         - Screen state machine
//! ├── toast.rs        - Toast lifecycle
//! ├── state/          - Application state
//! ├── views/          - Screens
//! └── theme/          - Colors and styles
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! // Run the egui app:
//! // cargo run --bin egui_app
//! ```

pub mod config;
pub mod auth;
pub mod types;
pub mod flow;
pub mod toast;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use auth::{AuthClient, ClientError, GraphqlAuthClient};
pub use config::Config;
pub use flow::{AuthFlow, FlowEvent, Screen, Session};
pub use state::AppState;
pub use toast::{Toast, ToastId, ToastKind, Toaster, TOAST_DURATION};
pub use types::UserInfo;
