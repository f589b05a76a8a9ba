/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_into_response_status() {
        let response = BackendError::handler(StatusCode::NOT_FOUND, "Not Found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_database_error_maps_to_503() {
        let response = BackendError::from(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
