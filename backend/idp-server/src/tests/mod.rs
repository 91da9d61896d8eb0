mod api;

use crate::AppState;

use idp_core::Identity;

use chrono::{Duration, Utc};
use uuid::Uuid;

pub(crate) const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes-long";

/// AppState over a migrated in-memory store
pub(crate) async fn create_test_state() -> AppState {
    let pool = idp_db::open_in_memory_store()
        .await
        .expect("Failed to create test store");

    AppState::new(pool, TEST_SECRET, Duration::days(7))
}

pub(crate) fn test_identity() -> Identity {
    Identity {
        id: Uuid::new_v4(),
        name: "Ann".to_string(),
        username: "ann1".to_string(),
        email: "ann@x.io".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        created_at: Utc::now(),
    }
}
