#[cfg(test)]
#[path = "submission_test.rs"]
mod submission_test;

use crate::net::types::NewStudent;
use crate::state::feedback::UiMessage;
use crate::state::form::FormState;
use crate::util::validate;

/// Banner shown after a create round-trip completes successfully.
pub const SUCCESS_MESSAGE: &str = "Student data saved successfully!";

/// Where the submission controller currently is.
///
/// `Submitting` covers the in-flight create request; every form control is
/// disabled exactly while this is the phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmitPhase {
    /// The loading flag driving input disablement and the button label.
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }
}

/// Decision for a submit request arriving in a given phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStart {
    /// A submission is already in flight; the request is dropped outright,
    /// independent of the button's disabled attribute.
    Ignored,
    /// Validation failed: show the message, make no network call.
    Invalid(&'static str),
    /// Validation passed: clear feedback, enter `Submitting`, send this.
    Proceed(NewStudent),
}

/// Run the idle → validating step of the submission cycle.
pub fn start_submit(phase: SubmitPhase, form: &FormState) -> SubmitStart {
    if phase.is_submitting() {
        return SubmitStart::Ignored;
    }
    match validate::validate(form) {
        Err(text) => SubmitStart::Invalid(text),
        Ok(()) => SubmitStart::Proceed(NewStudent {
            name: form.name.clone(),
            father_name: form.father_name.clone(),
            email: form.email.clone(),
        }),
    }
}

/// What to apply when the create request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitFinish {
    /// Banner to show: success, or the service/fallback error text.
    pub message: UiMessage,
    /// Success clears the form; failure keeps the input for a retry.
    pub reset_form: bool,
    /// The roster is re-fetched only after a confirmed create.
    pub refresh_roster: bool,
}

/// Run the `Submitting → (Succeeded | Failed)` step. The caller drops the
/// phase back to `Idle` before applying the result, on both paths, so the
/// loading flag cannot stay stuck after a failure.
pub fn finish_submit(result: Result<(), String>) -> SubmitFinish {
    match result {
        Ok(()) => SubmitFinish {
            message: UiMessage::success(SUCCESS_MESSAGE),
            reset_form: true,
            refresh_roster: true,
        },
        Err(text) => SubmitFinish {
            message: UiMessage::error(text),
            reset_form: false,
            refresh_roster: false,
        },
    }
}
