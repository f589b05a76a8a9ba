//! Authentication Module
//!
//! This module holds the one piece of real logic on the server: checking an
//! email/password pair against a stored bcrypt hash.
//!
//! # Architecture
//!
//! - **`users`** - User record, user stores (in-memory and PostgreSQL)
//! - **`seed`** - TOML seed files for the in-memory store
//! - **`credentials`** - `Authenticator`, the credential check itself
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and store lookups
//! ├── seed.rs         - Seed file parsing and password hashing
//! └── credentials.rs  - Credential verification
//! ```
//!
//! # Security
//!
//! - Passwords are compared with `bcrypt::verify`, never in plaintext
//! - Unknown email and wrong password fail with the same error and take
//!   comparable time (a dummy hash is verified for unknown emails)
//! - The password hash never leaves this module's callers; the GraphQL
//!   output type has no field for it
//! - No tokens or sessions are issued

/// User data model and store operations
pub mod users;

/// Seed file loading for the in-memory store
pub mod seed;

/// Credential verification
pub mod credentials;

pub use users::{User, UserStore, MemoryUserStore};
pub use seed::{SeedError, load_seed_file, parse_seed};
pub use credentials::{Authenticator, CredentialError};
