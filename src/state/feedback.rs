#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// Severity of a transient feedback message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MessageKind {
    #[default]
    None,
    Error,
    Success,
}

/// Transient feedback text and its severity, shown under the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl UiMessage {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    /// Empty messages are not rendered at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Feedback state with a monotonically increasing epoch.
///
/// The epoch makes the success auto-dismiss timer safe without cancellation:
/// the timer captures the epoch at display time, and `dismiss_success` is a
/// no-op once any newer message or field edit has bumped it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackState {
    pub message: UiMessage,
    /// True only during the success display window; drives the `show` class.
    pub success_window: bool,
    pub epoch: u64,
}

impl FeedbackState {
    /// Display a message, opening the success window for success kinds.
    /// Returns the epoch a dismiss timer must present to `dismiss_success`.
    pub fn show(&mut self, message: UiMessage) -> u64 {
        self.success_window = message.kind == MessageKind::Success;
        self.message = message;
        self.epoch += 1;
        self.epoch
    }

    /// Clear any message, as on a field edit.
    pub fn clear(&mut self) {
        self.message = UiMessage::default();
        self.success_window = false;
        self.epoch += 1;
    }

    /// One-shot dismiss fired after the success display window elapses.
    /// Stale timers (the epoch has moved on) leave newer feedback untouched.
    pub fn dismiss_success(&mut self, epoch: u64) {
        if self.epoch == epoch {
            self.clear();
        }
    }
}
