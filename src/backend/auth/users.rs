/**
 * User Model and Store Operations
 *
 * User records are created outside this service (seed file or database
 * rows) and only ever read here. Two stores are supported:
 *
 * - `MemoryUserStore` - immutable map keyed by email, seeded at startup
 * - PostgreSQL - the `users` table, reached through a sqlx pool
 */

use std::collections::HashMap;
use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::backend::auth::seed::SeedError;

/// User struct representing a stored account
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// User email address, unique lookup key
    pub email: String,
    /// Company the user belongs to, if any
    pub company: Option<String>,
    /// Hashed password (bcrypt)
    pub password_hash: String,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("company", &self.company)
            .finish_non_exhaustive()
    }
}

/// In-memory user store
///
/// Read-only once built. Email lookups are exact matches, like the
/// `WHERE email = $1` query of the PostgreSQL store.
#[derive(Debug, Default, Clone)]
pub struct MemoryUserStore {
    users: HashMap<String, User>,
}

impl MemoryUserStore {
    /// Build a store, rejecting two records with the same email.
    pub fn from_users(users: impl IntoIterator<Item = User>) -> Result<Self, SeedError> {
        let mut map = HashMap::new();
        for user in users {
            if map.contains_key(&user.email) {
                return Err(SeedError::DuplicateEmail(user.email));
            }
            map.insert(user.email.clone(), user);
        }
        Ok(Self { users: map })
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Snapshot of every record, sorted by email.
    pub fn users(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.values().cloned().collect();
        users.sort_by(|a, b| a.email.cmp(&b.email));
        users
    }
}

/// Where user records are read from
#[derive(Debug, Clone)]
pub enum UserStore {
    /// Seeded in-memory map
    Memory(Arc<MemoryUserStore>),
    /// PostgreSQL `users` table
    Postgres(PgPool),
}

impl UserStore {
    pub fn memory(store: MemoryUserStore) -> Self {
        Self::Memory(Arc::new(store))
    }

    /// Look a user up by email
    ///
    /// # Returns
    /// The user, or `None` if no record has this email
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        match self {
            Self::Memory(store) => Ok(store.find_by_email(email).cloned()),
            Self::Postgres(pool) => get_user_by_email(pool, email).await,
        }
    }

    /// Check the store can answer queries.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        match self {
            Self::Memory(_) => Ok(()),
            Self::Postgres(pool) => {
                sqlx::query("SELECT 1").execute(pool).await?;
                Ok(())
            }
        }
    }

    /// Short name for logs and the health endpoint
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }
}

/// Get user by email
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, email, company, password_hash
        FROM users
        WHERE email = $1
        "#
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
