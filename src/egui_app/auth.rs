/**
 * Authentication Client
 *
 * Sends the `login` mutation to the server. The UI only sees the
 * `AuthClient` trait, so tests can swap in a stub.
 *
 * Calls block; `AppState` runs them on a worker thread.
 */

use thiserror::Error;

use crate::egui_app::config::Config;
use crate::egui_app::types::{LoginData, UserInfo};
use crate::shared::graphql::{GraphQlRequest, GraphQlResponse, LOGIN_MUTATION};
use crate::shared::login::LoginForm;

/// Client-side login failures
///
/// The UI shows the same toast for every variant; the detail only
/// reaches the log.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("server rejected login: {0}")]
    GraphQl(String),
}

/// Something that can check credentials
pub trait AuthClient: Send + Sync {
    fn login(&self, form: &LoginForm) -> Result<UserInfo, ClientError>;
}

/// `AuthClient` over HTTP using the GraphQL endpoint
#[derive(Debug, Clone)]
pub struct GraphqlAuthClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl GraphqlAuthClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let http = reqwest::blocking::Client::builder().build()?;
        Ok(Self {
            http,
            endpoint: config.graphql_url(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AuthClient for GraphqlAuthClient {
    fn login(&self, form: &LoginForm) -> Result<UserInfo, ClientError> {
        let request = GraphQlRequest::new(LOGIN_MUTATION, form).operation_name("Login");

        let response = self.http.post(&self.endpoint).json(&request).send()?;

        // async-graphql answers 200 even for resolver errors; anything else
        // is a transport problem.
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body: GraphQlResponse<LoginData> = response.json()?;
        let data = body
            .into_result()
            .map_err(|error| ClientError::GraphQl(error.message))?;

        Ok(data.login)
    }
}
