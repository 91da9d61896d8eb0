use crate::models::registration::ALL_FIELDS_REQUIRED;
use crate::{CoreError, Registration};

use googletest::prelude::*;

fn given(value: &str) -> Option<String> {
    Some(value.to_string())
}

#[test]
fn given_all_fields_when_new_then_ok() {
    let result = Registration::new(given("Ann"), given("ann1"), given("a@x.com"), given("pw123"));

    assert_that!(result, ok(anything()));
    let registration = result.unwrap();
    assert_that!(registration.username.as_str(), eq("ann1"));
    assert_that!(registration.password(), eq("pw123"));
}

#[test]
fn given_missing_field_when_new_then_validation_error_names_field() {
    let result = Registration::new(given("Ann"), None, given("a@x.com"), given("pw123"));

    match result {
        Err(CoreError::Validation { message, field, .. }) => {
            assert_that!(message.as_str(), eq(ALL_FIELDS_REQUIRED));
            assert_that!(field.as_deref(), some(eq("username")));
        }
        other => panic!("Expected validation error, got {:?}", other),
    }
}

#[test]
fn given_empty_password_when_new_then_validation_error() {
    let result = Registration::new(given("Ann"), given("ann1"), given("a@x.com"), given(""));

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_no_fields_when_new_then_first_missing_field_is_reported() {
    let err = Registration::new(None, None, None, None).unwrap_err();

    assert_that!(err.to_string(), contains_substring(ALL_FIELDS_REQUIRED));
    let CoreError::Validation { field, .. } = err;
    assert_that!(field.as_deref(), some(eq("name")));
}

#[test]
fn given_registration_when_hashed_then_new_identity_keeps_profile() {
    let registration =
        Registration::new(given("Ann"), given("ann1"), given("a@x.com"), given("pw123")).unwrap();

    let new_identity = registration.into_new_identity("hash".to_string());

    assert_that!(new_identity.name.as_str(), eq("Ann"));
    assert_that!(new_identity.email.as_str(), eq("a@x.com"));
    assert_that!(new_identity.password_hash.as_str(), eq("hash"));
}

#[test]
fn given_registration_when_debug_formatted_then_password_is_redacted() {
    let registration =
        Registration::new(given("Ann"), given("ann1"), given("a@x.com"), given("pw123")).unwrap();

    assert_that!(format!("{:?}", registration), not(contains_substring("pw123")));
}
