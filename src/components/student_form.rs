//! Registration form: three controlled fields, feedback banner, submit.

use leptos::prelude::*;

use crate::state::feedback::{FeedbackState, MessageKind};
use crate::state::form::FormState;
use crate::state::submission::SubmitPhase;

/// The student entry form. Field edits clear any visible feedback; every
/// control is disabled while a submission is in flight.
#[component]
pub fn StudentForm(on_submit: Callback<()>) -> impl IntoView {
    let form = expect_context::<RwSignal<FormState>>();
    let feedback = expect_context::<RwSignal<FeedbackState>>();
    let phase = expect_context::<RwSignal<SubmitPhase>>();

    let submitting = move || phase.get().is_submitting();

    view! {
        <div class="form-container">
            <form
                class="student-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <div class="form-group">
                    <label for="name">"Student Name *"</label>
                    <input
                        class="form-input"
                        type="text"
                        id="name"
                        name="name"
                        placeholder="Enter student name"
                        prop:value=move || form.get().name
                        on:input=move |ev| {
                            form.update(|f| f.name = event_target_value(&ev));
                            feedback.update(FeedbackState::clear);
                        }
                        disabled=submitting
                    />
                </div>

                <div class="form-group">
                    <label for="father_name">"Father Name *"</label>
                    <input
                        class="form-input"
                        type="text"
                        id="father_name"
                        name="father_name"
                        placeholder="Enter father name"
                        prop:value=move || form.get().father_name
                        on:input=move |ev| {
                            form.update(|f| f.father_name = event_target_value(&ev));
                            feedback.update(FeedbackState::clear);
                        }
                        disabled=submitting
                    />
                </div>

                <div class="form-group">
                    <label for="email">"Email Address *"</label>
                    <input
                        class="form-input"
                        type="email"
                        id="email"
                        name="email"
                        placeholder="Enter email address"
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            form.update(|f| f.email = event_target_value(&ev));
                            feedback.update(FeedbackState::clear);
                        }
                        disabled=submitting
                    />
                </div>

                <Show when=move || !feedback.get().message.is_empty()>
                    <div
                        class="message"
                        class:error=move || feedback.get().message.kind == MessageKind::Error
                        class:success=move || feedback.get().message.kind == MessageKind::Success
                        class:show=move || feedback.get().success_window
                    >
                        {move || feedback.get().message.text}
                    </div>
                </Show>

                <button class="submit-button" type="submit" disabled=submitting>
                    <span>{move || if submitting() { "Submitting..." } else { "Submit" }}</span>
                </button>
            </form>
        </div>
    }
}
