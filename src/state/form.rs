#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// The three-field input buffer for a pending registration.
///
/// Owned by the register page as an `RwSignal`; reset to all-empty after a
/// successful submission, left untouched on failure so the user can retry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub father_name: String,
    pub email: String,
}

impl FormState {
    /// Clear all fields, as after a successful create.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
