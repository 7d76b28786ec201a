use super::*;

#[test]
fn create_error_message_uses_service_detail_verbatim() {
    assert_eq!(
        create_error_message(r#"{"detail":"Email already registered"}"#),
        "Email already registered"
    );
}

#[test]
fn create_error_message_falls_back_for_non_json_bodies() {
    assert_eq!(create_error_message("Internal Server Error"), CREATE_FALLBACK_MESSAGE);
    assert_eq!(create_error_message(""), CREATE_FALLBACK_MESSAGE);
}

#[test]
fn create_error_message_falls_back_for_missing_or_empty_detail() {
    assert_eq!(create_error_message(r#"{"detail":null}"#), CREATE_FALLBACK_MESSAGE);
    assert_eq!(create_error_message(r#"{"detail":""}"#), CREATE_FALLBACK_MESSAGE);
    assert_eq!(create_error_message(r#"{"error":"nope"}"#), CREATE_FALLBACK_MESSAGE);
}

#[test]
fn list_failed_message_formats_status() {
    assert_eq!(list_failed_message(503), "student list request failed: 503");
}
