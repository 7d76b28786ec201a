#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::net::types::Student;

/// The in-memory ordered list of students mirrored from the service.
///
/// Refreshes replace the list wholesale, in the order the service returned.
/// A failed refresh keeps the previous list and records the error for
/// diagnostics instead of surfacing it to the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterState {
    pub students: Vec<Student>,
    pub last_error: Option<String>,
}

impl RosterState {
    /// Replace the roster with a freshly fetched list.
    pub fn apply_loaded(&mut self, students: Vec<Student>) {
        self.students = students;
        self.last_error = None;
    }

    /// Record a failed fetch. The previous roster stays visible.
    pub fn apply_load_error(&mut self, error: String) {
        self.last_error = Some(error);
    }
}
