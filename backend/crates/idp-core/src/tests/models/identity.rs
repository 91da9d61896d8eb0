use crate::NewIdentity;

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

fn new_identity() -> NewIdentity {
    NewIdentity {
        name: "Ann".to_string(),
        username: "ann1".to_string(),
        email: "a@x.com".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
    }
}

#[test]
fn given_new_identity_when_assigned_id_then_fields_are_carried_over() {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let identity = new_identity().into_identity(id, now);

    assert_that!(identity.id, eq(id));
    assert_that!(identity.name.as_str(), eq("Ann"));
    assert_that!(identity.username.as_str(), eq("ann1"));
    assert_that!(identity.email.as_str(), eq("a@x.com"));
    assert_that!(identity.created_at, eq(now));
}

#[test]
fn given_identity_when_debug_formatted_then_hash_is_redacted() {
    let identity = new_identity().into_identity(Uuid::new_v4(), Utc::now());

    let rendered = format!("{:?}", identity);

    assert_that!(rendered, contains_substring("<redacted>"));
    assert_that!(rendered, not(contains_substring("argon2id")));
}
