use super::*;

// =============================================================
// UiMessage
// =============================================================

#[test]
fn ui_message_default_is_empty_none() {
    let msg = UiMessage::default();
    assert_eq!(msg.kind, MessageKind::None);
    assert!(msg.is_empty());
}

#[test]
fn ui_message_constructors_set_kind_and_text() {
    let err = UiMessage::error("bad");
    assert_eq!(err.kind, MessageKind::Error);
    assert_eq!(err.text, "bad");

    let ok = UiMessage::success("good");
    assert_eq!(ok.kind, MessageKind::Success);
    assert!(!ok.is_empty());
}

// =============================================================
// FeedbackState
// =============================================================

#[test]
fn show_success_opens_display_window() {
    let mut fb = FeedbackState::default();
    fb.show(UiMessage::success("saved"));
    assert!(fb.success_window);
    assert_eq!(fb.message.text, "saved");
}

#[test]
fn show_error_does_not_open_display_window() {
    let mut fb = FeedbackState::default();
    fb.show(UiMessage::error("nope"));
    assert!(!fb.success_window);
}

#[test]
fn clear_resets_message_and_window() {
    let mut fb = FeedbackState::default();
    fb.show(UiMessage::success("saved"));
    fb.clear();
    assert!(fb.message.is_empty());
    assert!(!fb.success_window);
}

#[test]
fn field_edit_clear_bumps_epoch() {
    let mut fb = FeedbackState::default();
    let epoch = fb.show(UiMessage::success("saved"));
    fb.clear();
    assert!(fb.epoch > epoch);
}

#[test]
fn dismiss_with_current_epoch_clears_message() {
    let mut fb = FeedbackState::default();
    let epoch = fb.show(UiMessage::success("saved"));
    fb.dismiss_success(epoch);
    assert!(fb.message.is_empty());
    assert!(!fb.success_window);
}

#[test]
fn dismiss_with_stale_epoch_is_a_noop() {
    let mut fb = FeedbackState::default();
    let stale = fb.show(UiMessage::success("saved"));
    fb.clear();
    fb.show(UiMessage::error("later"));
    fb.dismiss_success(stale);
    assert_eq!(fb.message.text, "later");
    assert_eq!(fb.message.kind, MessageKind::Error);
}
