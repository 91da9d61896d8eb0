#![allow(dead_code)]

use idp_core::NewIdentity;

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    idp_db::open_in_memory_store()
        .await
        .expect("Failed to create test pool")
}

pub fn new_identity(username: &str) -> NewIdentity {
    NewIdentity {
        name: format!("{} name", username),
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
    }
}
