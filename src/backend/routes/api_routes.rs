/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## GraphQL
 * - `POST /graphql` - Execute queries and mutations
 * - `GET /graphql` - GraphiQL explorer page
 *
 * ## Operations
 * - `GET /health` - Liveness plus a user store round trip
 */

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::backend::auth::users::UserStore;
use crate::backend::error::BackendError;
use crate::backend::graphql::LoginSchema;
use crate::backend::server::state::AppState;

/// Path the GraphQL endpoint is mounted on
pub const GRAPHQL_PATH: &str = "/graphql";

/// Health check response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub store: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(GRAPHQL_PATH, get(graphiql).post(graphql_handler))
        .route("/health", get(health))
}

/// Execute a GraphQL request against the schema
pub async fn graphql_handler(
    State(schema): State<LoginSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Serve the GraphiQL explorer
pub async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

/// Report whether the user store answers
///
/// # Errors
/// 503 Service Unavailable if the store cannot be reached
pub async fn health(
    State(store): State<UserStore>,
) -> Result<Json<HealthResponse>, BackendError> {
    store.ping().await.map_err(|e| {
        tracing::error!("Health check failed: {}", e);
        BackendError::handler(StatusCode::SERVICE_UNAVAILABLE, "User store unavailable")
    })?;

    Ok(Json(HealthResponse {
        status: "ok",
        store: store.kind(),
        timestamp: chrono::Utc::now(),
    }))
}
