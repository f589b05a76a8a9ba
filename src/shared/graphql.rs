//! GraphQL wire types
//!
//! Minimal envelopes for talking to the `/graphql` endpoint over plain JSON.
//! The backend parses requests with async-graphql; these types exist so the
//! client can build requests and read responses without pulling in a
//! GraphQL engine.

use serde::{Deserialize, Serialize};

/// Operation document for the login mutation.
///
/// Selects every public field of `User`; there is no password field to
/// select.
pub const LOGIN_MUTATION: &str = r#"mutation Login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    id
    name
    email
    company
  }
}"#;

/// A GraphQL request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<V> {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
    pub variables: V,
}

impl<V> GraphQlRequest<V> {
    pub fn new(query: impl Into<String>, variables: V) -> Self {
        Self {
            query: query.into(),
            operation_name: None,
            variables,
        }
    }

    pub fn operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}

/// A GraphQL response body
///
/// Per the GraphQL response format `data` may be null or absent when
/// `errors` is populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<D> GraphQlResponse<D> {
    /// Collapse the envelope into the data or the first error.
    pub fn into_result(self) -> Result<D, GraphQlError> {
        if let Some(error) = self.errors.into_iter().next() {
            return Err(error);
        }
        self.data.ok_or_else(|| GraphQlError {
            message: "response carried neither data nor errors".to_string(),
            extensions: None,
        })
    }
}

/// One entry of the `errors` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}
