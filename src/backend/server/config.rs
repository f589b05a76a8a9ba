/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * the selection of the user store.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with defaults for
 * local development:
 *
 * | Variable            | Default              | Purpose                          |
 * |---------------------|----------------------|----------------------------------|
 * | `SERVER_PORT`       | `3000`               | TCP port to listen on            |
 * | `DATABASE_URL`      | unset                | PostgreSQL user store            |
 * | `USER_SEED_FILE`    | unset                | TOML seed for the memory store   |
 * | `BCRYPT_COST`       | `bcrypt::DEFAULT_COST` | Cost for hashing seed passwords |
 * | `CORS_ALLOW_ORIGIN` | unset                | Allowed browser origin           |
 *
 * # Store Selection
 *
 * `DATABASE_URL` wins over `USER_SEED_FILE`. With neither set the server
 * starts with an empty in-memory store and every login fails.
 */

use std::path::PathBuf;

use sqlx::PgPool;

use crate::backend::auth::seed::load_seed_file;
use crate::backend::auth::users::{MemoryUserStore, UserStore};
use crate::backend::error::BackendError;
use crate::shared::config::ConfigError;

/// Default port when `SERVER_PORT` is unset
pub const DEFAULT_PORT: u16 = 3000;

/// bcrypt accepts work factors 4 through 31
const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Server configuration read from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port to bind on all interfaces
    pub port: u16,
    /// PostgreSQL connection string
    pub database_url: Option<String>,
    /// Seed file for the in-memory store
    pub seed_file: Option<PathBuf>,
    /// bcrypt cost for seed passwords and the dummy hash
    pub bcrypt_cost: u32,
    /// Origin allowed by the CORS layer
    pub cors_allow_origin: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            seed_file: None,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            cors_allow_origin: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match get("SERVER_PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(value) => match value.parse::<u32>() {
                Ok(cost) if (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) => cost,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "BCRYPT_COST",
                        value,
                    })
                }
            },
            None => bcrypt::DEFAULT_COST,
        };

        Ok(Self {
            port,
            database_url: get("DATABASE_URL"),
            seed_file: get("USER_SEED_FILE").map(PathBuf::from),
            bcrypt_cost,
            cors_allow_origin: get("CORS_ALLOW_ORIGIN"),
        })
    }
}

/// Build the user store described by the configuration
///
/// # Process
///
/// 1. With `DATABASE_URL`: connect a pool and run migrations
/// 2. With `USER_SEED_FILE`: load and hash the seed users
/// 3. Otherwise: an empty in-memory store
///
/// # Errors
///
/// Connection and seed failures abort startup. Migration failures are
/// logged and startup continues, since the schema may already be in place.
pub async fn load_user_store(config: &ServerConfig) -> Result<UserStore, BackendError> {
    if let Some(database_url) = &config.database_url {
        tracing::info!("Connecting to database...");
        let pool = PgPool::connect(database_url).await?;
        tracing::info!("Database connection pool created successfully");

        tracing::info!("Running database migrations...");
        match sqlx::migrate!().run(&pool).await {
            Ok(_) => tracing::info!("Database migrations completed successfully"),
            Err(e) => {
                tracing::error!("Failed to run database migrations: {}", e);
                tracing::warn!("Continuing without migrations - database might not be up to date");
            }
        }

        return Ok(UserStore::Postgres(pool));
    }

    let users = match &config.seed_file {
        Some(path) => load_seed_file(path, config.bcrypt_cost)?,
        None => {
            tracing::warn!("Neither DATABASE_URL nor USER_SEED_FILE set. Every login will fail.");
            Vec::new()
        }
    };

    Ok(UserStore::memory(MemoryUserStore::from_users(users)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("SERVER_PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/login"),
            ("USER_SEED_FILE", "users.toml"),
            ("BCRYPT_COST", "10"),
            ("CORS_ALLOW_ORIGIN", "http://localhost:5173"),
        ]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/login"));
        assert_eq!(config.seed_file, Some(PathBuf::from("users.toml")));
        assert_eq!(config.bcrypt_cost, 10);
        assert_eq!(config.cors_allow_origin.as_deref(), Some("http://localhost:5173"));
    }

    #[test]
    fn test_blank_values_are_unset() {
        let config = ServerConfig::from_lookup(lookup(&[("DATABASE_URL", "  ")])).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_invalid_port() {
        let err = ServerConfig::from_lookup(lookup(&[("SERVER_PORT", "http")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "SERVER_PORT",
                value: "http".to_string()
            }
        );
    }

    #[test]
    fn test_bcrypt_cost_out_of_range() {
        assert!(ServerConfig::from_lookup(lookup(&[("BCRYPT_COST", "2")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[("BCRYPT_COST", "40")])).is_err());
    }

    #[test]
    fn test_bcrypt_cost_bounds_are_inclusive() {
        let low = ServerConfig::from_lookup(lookup(&[("BCRYPT_COST", "4")])).unwrap();
        assert_eq!(low.bcrypt_cost, 4);
        let high = ServerConfig::from_lookup(lookup(&[("BCRYPT_COST", "31")])).unwrap();
        assert_eq!(high.bcrypt_cost, 31);
        assert!(ServerConfig::from_lookup(lookup(&[("BCRYPT_COST", "32")])).is_err());
    }

    #[tokio::test]
    async fn test_load_empty_memory_store() {
        let store = load_user_store(&ServerConfig::default()).await.unwrap();
        assert_eq!(store.kind(), "memory");
        assert!(store.find_user_by_email("ana@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_seeded_memory_store() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[[users]]\nname = \"Ana\"\nemail = \"ana@example.com\"\npassword = \"segredo\""
        )
        .unwrap();

        let config = ServerConfig {
            seed_file: Some(file.path().to_path_buf()),
            bcrypt_cost: 4,
            ..ServerConfig::default()
        };
        let store = load_user_store(&config).await.unwrap();
        let user = store.find_user_by_email("ana@example.com").await.unwrap().unwrap();
        assert_eq!(user.name, "Ana");
    }

    #[tokio::test]
    async fn test_missing_seed_file_fails() {
        let config = ServerConfig {
            seed_file: Some(PathBuf::from("/nonexistent/users.toml")),
            ..ServerConfig::default()
        };
        let err = load_user_store(&config).await.unwrap_err();
        assert!(matches!(err, BackendError::Seed(_)));
    }
}
