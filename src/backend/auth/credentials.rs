/**
 * Credential Verification
 *
 * Checks an email/password pair against the stored bcrypt hash.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt (on the blocking pool)
 * 3. Return the user record
 *
 * # Security
 *
 * - Unknown email and wrong password both yield `InvalidCredentials`
 * - Unknown emails still pay for one bcrypt verification against a dummy
 *   hash of the same cost
 * - A stored hash bcrypt cannot parse is logged and treated as a mismatch
 * - Passwords are never logged
 */

use std::sync::Arc;

use thiserror::Error;

use crate::backend::auth::users::{User, UserStore};
use crate::shared::messages;

/// Plaintext behind the dummy hash verified for unknown emails.
const DUMMY_PASSWORD: &str = "loginflow-unknown-account";

/// Credential check failures
#[derive(Debug, Error)]
pub enum CredentialError {
    /// No such user, or the password does not match. The two cases are
    /// deliberately indistinguishable.
    #[error("{}", messages::INVALID_CREDENTIALS)]
    InvalidCredentials,

    /// The user store could not be queried
    #[error("user store unavailable: {0}")]
    Store(#[from] sqlx::Error),

    /// The blocking bcrypt task did not complete
    #[error("password check aborted: {0}")]
    Aborted(String),
}

impl CredentialError {
    /// Message safe to show a client, identical for every variant.
    pub fn public_message(&self) -> &'static str {
        messages::INVALID_CREDENTIALS
    }
}

/// Verifies credentials against a `UserStore`
#[derive(Debug, Clone)]
pub struct Authenticator {
    store: UserStore,
    dummy_hash: Arc<str>,
}

impl Authenticator {
    /// Create an authenticator.
    ///
    /// `cost` should match the cost of the stored hashes so the unknown-email
    /// path does the same amount of work as a real verification.
    pub fn new(store: UserStore, cost: u32) -> Result<Self, bcrypt::BcryptError> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, cost)?;
        Ok(Self {
            store,
            dummy_hash: Arc::from(dummy_hash),
        })
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Verify an email/password pair
    ///
    /// # Errors
    ///
    /// * `InvalidCredentials` - unknown email or wrong password
    /// * `Store` - the lookup itself failed
    /// * `Aborted` - the bcrypt task panicked or was cancelled
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<User, CredentialError> {
        let user = self.store.find_user_by_email(email).await.map_err(|e| {
            tracing::error!(error = ?e, "User lookup failed");
            CredentialError::Store(e)
        })?;

        let Some(user) = user else {
            // Result ignored, the work is what matters here.
            let _ = check_password(password, &self.dummy_hash).await;
            tracing::warn!("Rejected login attempt");
            return Err(CredentialError::InvalidCredentials);
        };

        if !check_password(password, &user.password_hash).await? {
            tracing::warn!("Rejected login attempt");
            return Err(CredentialError::InvalidCredentials);
        }

        tracing::info!(user_id = %user.id, email = %user.email, "User authenticated");
        Ok(user)
    }
}

/// Run `bcrypt::verify` off the async workers.
async fn check_password(password: &str, hash: &str) -> Result<bool, CredentialError> {
    let password = password.to_owned();
    let hash = hash.to_owned();

    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| CredentialError::Aborted(e.to_string()))?;

    match outcome {
        Ok(valid) => Ok(valid),
        Err(e) => {
            tracing::error!(error = ?e, "Stored password hash could not be verified");
            Ok(false)
        }
    }
}
