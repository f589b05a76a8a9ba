/**
 * Login Form
 *
 * The credential pair submitted by the client and accepted by the `login`
 * mutation. Validation rules live on the struct so both sides of the wire
 * run the exact same checks before any credential lookup happens.
 */

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::shared::error::SharedError;

/// Email/password pair for a login attempt
#[derive(Clone, Deserialize, Serialize, Validate)]
pub struct LoginForm {
    /// Account email, the lookup key for the user record
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    /// Plaintext password, only ever compared against the stored hash
    #[validate(custom(function = "validate_password"))]
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validate the form, yielding it back on success.
    ///
    /// The email is trimmed first; the password is taken verbatim.
    pub fn validated(mut self) -> Result<Self, SharedError> {
        self.email = self.email.trim().to_string();
        self.validate()?;
        Ok(self)
    }
}

/// bcrypt only reads the first 72 bytes of its input.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Non-empty and short enough that bcrypt sees every byte.
fn validate_password(password: &str) -> Result<(), ValidationError> {
    let message = if password.is_empty() {
        "password is required"
    } else if password.len() > MAX_PASSWORD_BYTES {
        "password must be at most 72 bytes"
    } else {
        return Ok(());
    };
    let mut error = ValidationError::new("password");
    error.message = Some(Cow::Borrowed(message));
    Err(error)
}

// Manual impl keeps the password out of logs and panic messages.
impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let form = LoginForm::new("ana@example.com", "segredo").validated().unwrap();
        assert_eq!(form.email, "ana@example.com");
        assert_eq!(form.password, "segredo");
    }

    #[test]
    fn test_email_is_trimmed() {
        let form = LoginForm::new("  ana@example.com ", "x").validated().unwrap();
        assert_eq!(form.email, "ana@example.com");
    }

    #[test]
    fn test_invalid_email_rejected() {
        let err = LoginForm::new("not-an-email", "x").validated().unwrap_err();
        assert_eq!(err.fields(), ["email".to_string()]);
    }

    #[test]
    fn test_empty_password_rejected() {
        let err = LoginForm::new("ana@example.com", "").validated().unwrap_err();
        assert_eq!(err.fields(), ["password".to_string()]);
    }

    #[test]
    fn test_overlong_password_rejected() {
        let long = "a".repeat(MAX_PASSWORD_BYTES + 1);
        let err = LoginForm::new("ana@example.com", long).validated().unwrap_err();
        assert_eq!(err.fields(), ["password".to_string()]);
        assert!(err.to_string().contains("72 bytes"));
    }

    #[test]
    fn test_password_at_limit_accepted() {
        let exact = "a".repeat(MAX_PASSWORD_BYTES);
        assert!(LoginForm::new("ana@example.com", exact).validated().is_ok());
    }

    #[test]
    fn test_both_fields_reported_sorted() {
        let err = LoginForm::new("", "").validated().unwrap_err();
        assert_eq!(err.fields(), ["email".to_string(), "password".to_string()]);
    }

    #[test]
    fn test_debug_redacts_password() {
        let form = LoginForm::new("ana@example.com", "hunter2");
        let debug = format!("{:?}", form);
        assert!(debug.contains("ana@example.com"));
        assert!(!debug.contains("hunter2"));
    }
}
