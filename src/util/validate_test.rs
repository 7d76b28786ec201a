use super::*;

fn form(name: &str, father_name: &str, email: &str) -> FormState {
    FormState {
        name: name.to_owned(),
        father_name: father_name.to_owned(),
        email: email.to_owned(),
    }
}

// =============================================================
// Rule order
// =============================================================

#[test]
fn blank_name_wins_regardless_of_other_fields() {
    assert_eq!(validate(&form("", "", "")), Err(NAME_REQUIRED));
    assert_eq!(validate(&form("   ", "X", "x@y.com")), Err(NAME_REQUIRED));
    assert_eq!(validate(&form("\t", "", "not-an-email")), Err(NAME_REQUIRED));
}

#[test]
fn blank_father_name_is_second() {
    assert_eq!(validate(&form("Ann", "  ", "x@y.com")), Err(FATHER_NAME_REQUIRED));
}

#[test]
fn blank_email_is_third() {
    assert_eq!(validate(&form("Ann", "Bob", "   ")), Err(EMAIL_REQUIRED));
}

#[test]
fn malformed_email_is_last() {
    assert_eq!(validate(&form("Ann", "Bob", "not-an-email")), Err(EMAIL_INVALID));
}

#[test]
fn well_formed_input_passes() {
    assert_eq!(validate(&form("Ann", "Bob", "ann@example.com")), Ok(()));
}

// =============================================================
// Email shape
// =============================================================

#[test]
fn email_requires_all_three_segments() {
    assert!(!is_valid_email("abc"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("a@.com"));
    assert!(is_valid_email("a@b.co"));
}

#[test]
fn email_rejects_whitespace_and_extra_at_signs() {
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email("a@b c.d"));
    assert!(!is_valid_email("a@@b.c"));
    assert!(!is_valid_email("@b.c"));
    assert!(!is_valid_email("a@"));
}

#[test]
fn email_any_interior_domain_dot_is_sufficient() {
    assert!(is_valid_email("first.last@mail.example.org"));
    assert!(!is_valid_email("a@b."));
    assert!(!is_valid_email("a@.b"));
}
