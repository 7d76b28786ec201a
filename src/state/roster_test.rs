use super::*;

fn student(id: i64, name: &str) -> Student {
    Student {
        id,
        name: name.to_owned(),
        father_name: "Bob".to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        created_at: "2024-01-05T10:24:00Z".to_owned(),
    }
}

#[test]
fn roster_state_defaults() {
    let roster = RosterState::default();
    assert!(roster.students.is_empty());
    assert!(roster.last_error.is_none());
}

#[test]
fn apply_loaded_replaces_wholesale() {
    let mut roster = RosterState::default();
    roster.apply_loaded(vec![student(1, "Ann"), student(2, "Ben")]);
    roster.apply_loaded(vec![student(3, "Cay")]);
    assert_eq!(roster.students.len(), 1);
    assert_eq!(roster.students[0].id, 3);
}

#[test]
fn reloading_an_unchanged_response_is_idempotent() {
    let list = vec![student(1, "Ann"), student(2, "Ben")];
    let mut once = RosterState::default();
    once.apply_loaded(list.clone());
    let mut twice = once.clone();
    twice.apply_loaded(list);
    assert_eq!(once, twice);
}

#[test]
fn load_error_keeps_previous_roster() {
    let mut roster = RosterState::default();
    roster.apply_loaded(vec![student(1, "Ann")]);
    roster.apply_load_error("connection refused".to_owned());
    assert_eq!(roster.students.len(), 1);
    assert_eq!(roster.last_error.as_deref(), Some("connection refused"));
}

#[test]
fn successful_reload_clears_recorded_error() {
    let mut roster = RosterState::default();
    roster.apply_load_error("connection refused".to_owned());
    roster.apply_loaded(vec![student(1, "Ann")]);
    assert!(roster.last_error.is_none());
}
