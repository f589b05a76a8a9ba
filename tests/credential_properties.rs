//! Property-based tests for credential verification

#![cfg(feature = "ssr")]

mod common;

use proptest::prelude::*;
use uuid::Uuid;

use common::TEST_COST;
use loginflow::backend::auth::users::{MemoryUserStore, User, UserStore};
use loginflow::backend::{Authenticator, CredentialError};
use loginflow::shared::messages;

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
        .block_on(future)
}

fn authenticator(email: &str, password: &str) -> (Authenticator, MemoryUserStore) {
    let user = User {
        id: Uuid::new_v4(),
        name: "Fixture".to_string(),
        email: email.to_string(),
        company: None,
        password_hash: bcrypt::hash(password, TEST_COST).unwrap(),
    };
    let memory = MemoryUserStore::from_users(vec![user]).unwrap();
    let store = UserStore::memory(memory.clone());
    (Authenticator::new(store, TEST_COST).unwrap(), memory)
}

fn email() -> impl Strategy<Value = String> {
    "[a-z]{1,12}@[a-z]{1,8}\\.(com|org|net)"
}

fn password() -> impl Strategy<Value = String> {
    "[ -~]{1,32}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_registered_pair_verifies(email in email(), password in password()) {
        let (auth, _) = authenticator(&email, &password);
        let user = block_on(auth.authenticate(&email, &password)).unwrap();
        prop_assert_eq!(user.email, email);
    }

    #[test]
    fn test_other_password_fails(
        email in email(),
        password in password(),
        other in password(),
    ) {
        prop_assume!(password != other);
        let (auth, _) = authenticator(&email, &password);
        let err = block_on(auth.authenticate(&email, &other)).unwrap_err();
        prop_assert!(matches!(err, CredentialError::InvalidCredentials));
    }

    #[test]
    fn test_unknown_email_matches_wrong_password_message(
        email in email(),
        unknown in email(),
        password in password(),
    ) {
        prop_assume!(email != unknown);
        let (auth, _) = authenticator(&email, &password);

        let unknown_err = block_on(auth.authenticate(&unknown, &password)).unwrap_err();
        let wrong_err = block_on(auth.authenticate(&email, &format!("{password}!"))).unwrap_err();

        prop_assert_eq!(unknown_err.to_string(), wrong_err.to_string());
        prop_assert_eq!(unknown_err.to_string(), messages::INVALID_CREDENTIALS);
    }

    #[test]
    fn test_failed_verification_leaves_store_untouched(
        email in email(),
        password in password(),
        attempts in prop::collection::vec(password(), 1..4),
    ) {
        let (auth, memory) = authenticator(&email, &password);
        let before = memory.users();

        for attempt in attempts.iter().filter(|attempt| **attempt != password) {
            let _ = block_on(auth.authenticate(&email, attempt));
        }

        let after = match auth.store() {
            UserStore::Memory(store) => store.users(),
            UserStore::Postgres(_) => unreachable!("memory store expected"),
        };
        prop_assert_eq!(before, after);
    }
}
