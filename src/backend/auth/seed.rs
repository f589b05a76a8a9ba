//! Seed files for the in-memory user store.
//!
//! ```toml
//! [[users]]
//! name = "Ana Souza"
//! email = "ana@example.com"
//! company = "Acme"
//! password_hash = "$2b$12$..."
//!
//! [[users]]
//! name = "Bruno"
//! email = "bruno@example.com"
//! password = "hashed-at-load"
//! ```
//!
//! Each entry carries exactly one of `password_hash` (already bcrypt) or
//! `password` (hashed at load with the configured cost).

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::backend::auth::users::User;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid seed file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("seed user {0} has an invalid email")]
    InvalidEmail(String),
    #[error("seed user {0} needs exactly one of `password` or `password_hash`")]
    PasswordSource(String),
    #[error("failed to hash seed password: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("duplicate seed email: {0}")]
    DuplicateEmail(String),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedFile {
    #[serde(default)]
    users: Vec<SeedUser>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SeedUser {
    id: Option<Uuid>,
    name: String,
    email: String,
    company: Option<String>,
    password: Option<String>,
    password_hash: Option<String>,
}

impl std::fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedUser")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl SeedUser {
    fn into_user(self, cost: u32) -> Result<User, SeedError> {
        if !self.email.validate_email() {
            return Err(SeedError::InvalidEmail(self.email));
        }
        let password_hash = match (self.password, self.password_hash) {
            (None, Some(hash)) => hash,
            (Some(password), None) => bcrypt::hash(password, cost)?,
            _ => return Err(SeedError::PasswordSource(self.email)),
        };
        Ok(User {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name,
            email: self.email,
            company: self.company,
            password_hash,
        })
    }
}

/// Parse seed file contents into user records.
pub fn parse_seed(contents: &str, cost: u32) -> Result<Vec<User>, SeedError> {
    let file: SeedFile = toml::from_str(contents)?;
    file.users
        .into_iter()
        .map(|user| user.into_user(cost))
        .collect()
}

/// Read and parse a seed file from disk.
pub fn load_seed_file(path: &Path, cost: u32) -> Result<Vec<User>, SeedError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let users = parse_seed(&contents, cost)?;
    tracing::info!(path = %path.display(), count = users.len(), "Loaded seed users");
    Ok(users)
}
