use crate::shared::config::{AppConfig, AppConfigBuilder, ConfigError};

/// Default server URL
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Client configuration wrapper.
#[derive(Debug, Clone)]
pub struct Config {
    app: AppConfig,
}

impl Config {
    /// Read `CLIENT_API_URL`, falling back to the default server URL
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_url = std::env::var("CLIENT_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        Self::with_builder(AppConfig::builder().server_url(server_url))
    }

    pub fn with_builder(builder: AppConfigBuilder) -> Result<Self, ConfigError> {
        let app = builder.build()?;
        Ok(Self { app })
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url(), path)
    }

    /// URL of the GraphQL endpoint
    pub fn graphql_url(&self) -> String {
        self.api_url("/graphql")
    }

    pub fn server_url(&self) -> &str {
        self.app.server_url.as_deref().unwrap_or(DEFAULT_SERVER_URL)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig {
                server_url: Some(DEFAULT_SERVER_URL.to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.server_url(), "http://127.0.0.1:3000");
    }

    #[test]
    fn test_graphql_url() {
        let config = Config::default();
        assert_eq!(config.graphql_url(), "http://127.0.0.1:3000/graphql");
    }

    #[test]
    fn test_with_builder_trims_trailing_slash() {
        let config =
            Config::with_builder(AppConfig::builder().server_url("http://localhost:8080/")).unwrap();
        assert_eq!(config.graphql_url(), "http://localhost:8080/graphql");
    }

    #[test]
    fn test_with_builder_rejects_bad_scheme() {
        let result = Config::with_builder(AppConfig::builder().server_url("ftp://localhost"));
        assert!(result.is_err());
    }
}
