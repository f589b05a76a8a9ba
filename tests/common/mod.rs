//! Common test utilities and helpers
//!
//! - Seeded user fixtures hashed at the minimum bcrypt cost
//! - A test server built on an in-memory user store
//! - GraphQL request helpers

#![allow(dead_code)]

use serde_json::{json, Value};
use uuid::Uuid;

use loginflow::shared::graphql::LOGIN_MUTATION;

/// bcrypt cost for fixtures; anything higher just slows the suite down
pub const TEST_COST: u32 = 4;

/// Credentials of a seeded fixture user
pub struct TestUser {
    pub id: Uuid,
    pub name: &'static str,
    pub email: &'static str,
    pub password: &'static str,
    pub company: Option<&'static str>,
}

pub const ANA: TestUser = TestUser {
    id: Uuid::from_u128(0x0a6e4f1c_3d0b_4b59_9a37_6f2b1e3c9d10),
    name: "Ana Souza",
    email: "ana@example.com",
    password: "segredo123",
    company: Some("Acme"),
};

pub const BRUNO: TestUser = TestUser {
    id: Uuid::from_u128(0x7f1c8c8e_3f4a_4c1e_9d1a_2b9f0d6c5e11),
    name: "Bruno Lima",
    email: "bruno@example.com",
    password: "senha-forte",
    company: None,
};

/// GraphQL body for the login mutation
pub fn login_body(email: &str, password: &str) -> Value {
    json!({
        "query": LOGIN_MUTATION,
        "operationName": "Login",
        "variables": { "email": email, "password": password }
    })
}

#[cfg(feature = "ssr")]
pub mod server {
    use std::time::Duration;

    use axum_test::TestServer;
    use sqlx::postgres::PgPoolOptions;

    use loginflow::backend::auth::users::{MemoryUserStore, User, UserStore};
    use loginflow::backend::server::{build_app, ServerConfig};

    use super::{TestUser, ANA, BRUNO, TEST_COST};

    pub fn user(fixture: &TestUser) -> User {
        User {
            id: fixture.id,
            name: fixture.name.to_string(),
            email: fixture.email.to_string(),
            company: fixture.company.map(str::to_string),
            password_hash: bcrypt::hash(fixture.password, TEST_COST).unwrap(),
        }
    }

    /// Store holding the two fixture users
    pub fn seeded_store() -> UserStore {
        UserStore::memory(MemoryUserStore::from_users(vec![user(&ANA), user(&BRUNO)]).unwrap())
    }

    /// Postgres store pointed at a port nothing listens on
    pub fn unreachable_store() -> UserStore {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_millis(300))
            .connect_lazy("postgres://u:p@127.0.0.1:1/none")
            .unwrap();
        UserStore::Postgres(pool)
    }

    pub fn create_test_server() -> TestServer {
        create_test_server_with(seeded_store())
    }

    pub fn create_test_server_with(store: UserStore) -> TestServer {
        let config = ServerConfig {
            bcrypt_cost: TEST_COST,
            ..ServerConfig::default()
        };
        let app = build_app(store, &config).unwrap();
        TestServer::new(app).unwrap()
    }
}
