/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including store loading, schema creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load the user store (PostgreSQL or seeded memory)
 * 2. Create the authenticator, which hashes its dummy password once
 * 3. Build the GraphQL schema around the authenticator
 * 4. Create and configure the router
 */

use axum::Router;

use crate::backend::auth::credentials::Authenticator;
use crate::backend::auth::users::UserStore;
use crate::backend::error::BackendError;
use crate::backend::graphql::build_schema;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_user_store, ServerConfig};
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the user store cannot be loaded or the dummy hash cannot
/// be computed.
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing login server");

    let store = load_user_store(config).await?;
    build_app(store, config)
}

/// Assemble the router around an already loaded store
///
/// Tests use this directly with an in-memory store.
pub fn build_app(store: UserStore, config: &ServerConfig) -> Result<Router<()>, BackendError> {
    tracing::info!(store = store.kind(), "User store ready");

    let authenticator = Authenticator::new(store.clone(), config.bcrypt_cost)?;
    let app_state = AppState {
        schema: build_schema(authenticator),
        user_store: store,
    };

    let app = create_router(app_state, config.cors_allow_origin.as_deref());
    tracing::info!("Router configured");

    Ok(app)
}
