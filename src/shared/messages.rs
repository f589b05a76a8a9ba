//! User-facing message strings.
//!
//! The UI speaks Portuguese; every string a user can read lives here so the
//! client, the server and the tests agree on the exact wording.

/// Toast shown after a successful login.
pub const LOGIN_SUCCEEDED: &str = "Login realizado com sucesso!";

/// Toast shown after any failed login attempt.
pub const LOGIN_FAILED: &str = "Email ou senha inválidos!";

/// GraphQL error message for a rejected credential check. Identical for an
/// unknown email and a wrong password.
pub const INVALID_CREDENTIALS: &str = "Usuário ou senha inválidos";

/// GraphQL error message for a request that failed form validation.
pub const INVALID_LOGIN_INPUT: &str = "Dados de login inválidos";
