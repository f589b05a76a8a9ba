/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct holds:
 * - The GraphQL schema, which owns the `Authenticator`
 * - The user store, for the health check
 *
 * Both fields are cheap to clone (`Arc`s and a pool handle), so the state
 * needs no extra locking.
 *
 * # Example
 *
 * ```rust,ignore
 * use axum::extract::State;
 * use loginflow::backend::LoginSchema;
 *
 * async fn handler(State(schema): State<LoginSchema>) {
 *     let sdl = schema.sdl();
 * }
 * ```
 */

use axum::extract::FromRef;

use crate::backend::auth::users::UserStore;
use crate::backend::graphql::LoginSchema;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Executable GraphQL schema
    pub schema: LoginSchema,

    /// User store backing the authenticator
    pub user_store: UserStore,
}

impl FromRef<AppState> for LoginSchema {
    fn from_ref(state: &AppState) -> Self {
        state.schema.clone()
    }
}

impl FromRef<AppState> for UserStore {
    fn from_ref(state: &AppState) -> Self {
        state.user_store.clone()
    }
}
