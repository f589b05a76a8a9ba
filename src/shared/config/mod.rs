//! Application configuration module
//!
//! Provides configuration types for the client application.

use reqwest::Url;
use thiserror::Error;

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Server URL
    pub server_url: Option<String>,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.server_url {
            validate_server_url(url)?;
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    server_url: Option<String>,
}

impl AppConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let config = AppConfig {
            // Trailing slashes would double up when joining endpoint paths.
            server_url: self.server_url.map(|url| url.trim_end_matches('/').to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

fn validate_server_url(url: &str) -> Result<(), ConfigError> {
    let parsed = Url::parse(url).map_err(|_| ConfigError::InvalidUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(ConfigError::InvalidUrl(url.to_string())),
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_accepts_http_url() {
        let config = AppConfig::builder()
            .server_url("http://localhost:3000")
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_build_trims_trailing_slash() {
        let config = AppConfig::builder()
            .server_url("https://login.example.com/")
            .build()
            .unwrap();
        assert_eq!(config.server_url.as_deref(), Some("https://login.example.com"));
    }

    #[test]
    fn test_build_rejects_non_http_scheme() {
        let err = AppConfig::builder()
            .server_url("ftp://example.com")
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidUrl("ftp://example.com".to_string()));
    }

    #[test]
    fn test_build_rejects_garbage() {
        assert!(AppConfig::builder().server_url("not a url").build().is_err());
    }

    #[test]
    fn test_empty_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
