//! Field validation for the registration form.
//!
//! Rules run in a fixed order and the first failure wins: blank checks per
//! field, then the email shape. Later rules are never evaluated once an
//! earlier one fails.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::state::form::FormState;

pub const NAME_REQUIRED: &str = "Please enter student name";
pub const FATHER_NAME_REQUIRED: &str = "Please enter father name";
pub const EMAIL_REQUIRED: &str = "Please enter email address";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

/// Validate the form buffer, returning the first failing rule's message.
///
/// # Errors
///
/// The display text for the first rule that fails.
pub fn validate(form: &FormState) -> Result<(), &'static str> {
    if form.name.trim().is_empty() {
        return Err(NAME_REQUIRED);
    }
    if form.father_name.trim().is_empty() {
        return Err(FATHER_NAME_REQUIRED);
    }
    if form.email.trim().is_empty() {
        return Err(EMAIL_REQUIRED);
    }
    if !is_valid_email(&form.email) {
        return Err(EMAIL_INVALID);
    }
    Ok(())
}

/// Shape check for `local@host.tail`: exactly one `@` with a non-empty local
/// part, an interior `.` in the domain, and no whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
