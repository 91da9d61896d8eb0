
use idp_core::Identity;

use chrono::Utc;
use uuid::Uuid;

pub(crate) fn test_identity() -> Identity {
    Identity {
        id: Uuid::new_v4(),
        name: "Ann".to_string(),
        username: "ann1".to_string(),
        email: "a@x.com".to_string(),
        password_hash: "not-used".to_string(),
        created_at: Utc::now(),
    }
}
