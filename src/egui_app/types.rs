/**
 * Shared Types Module
 *
 * Response payloads the client reads from the `login` mutation.
 */

use serde::{Deserialize, Serialize};

/// User information returned by `login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub company: Option<String>,
}

impl UserInfo {
    /// Name to greet the user with, falling back to the email
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// `data` member of a `login` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub login: UserInfo,
}
