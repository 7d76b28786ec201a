//! Registration page: the entry form plus the roster it feeds.
//!
//! ORCHESTRATION
//! =============
//! The page owns the submission cycle — validate, POST, then re-fetch the
//! roster — with the transitions kept in `state::submission` so they stay
//! testable off-browser. The roster refresh is only started after the create
//! success response has been observed.

use leptos::prelude::*;

use crate::components::student_form::StudentForm;
use crate::components::student_list::StudentList;
use crate::config::ApiConfig;
use crate::state::feedback::{FeedbackState, UiMessage};
use crate::state::form::FormState;
use crate::state::roster::RosterState;
use crate::state::submission::{self, SubmitPhase, SubmitStart};

/// How long the success banner stays up before auto-dismissing.
pub const SUCCESS_DISMISS_MS: u64 = 3000;

/// Replace the roster from the service, keeping the old list on failure.
#[cfg(feature = "hydrate")]
async fn load_roster(config: ApiConfig, roster: RwSignal<RosterState>) {
    match crate::net::api::fetch_students(&config).await {
        Ok(students) => roster.update(|r| r.apply_loaded(students)),
        Err(e) => {
            leptos::logging::warn!("student list fetch failed: {e}");
            roster.update(|r| r.apply_load_error(e));
        }
    }
}

/// The single screen: header, entry form, and registered-students roster.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let form = expect_context::<RwSignal<FormState>>();
    let feedback = expect_context::<RwSignal<FeedbackState>>();
    let phase = expect_context::<RwSignal<SubmitPhase>>();
    let roster = expect_context::<RwSignal<RosterState>>();

    // Initial roster fetch once the browser side is live.
    #[cfg(feature = "hydrate")]
    {
        let config = config.clone();
        Effect::new(move || {
            leptos::task::spawn_local(load_roster(config.clone(), roster));
        });
    }

    let on_submit = Callback::new(move |()| {
        match submission::start_submit(phase.get_untracked(), &form.get_untracked()) {
            SubmitStart::Ignored => {}
            SubmitStart::Invalid(text) => {
                feedback.update(|f| {
                    f.show(UiMessage::error(text));
                });
            }
            SubmitStart::Proceed(new_student) => {
                feedback.update(FeedbackState::clear);
                phase.set(SubmitPhase::Submitting);

                #[cfg(feature = "hydrate")]
                {
                    let config = config.clone();
                    leptos::task::spawn_local(async move {
                        let result = crate::net::api::create_student(&config, &new_student).await;
                        phase.set(SubmitPhase::Idle);

                        let finish = submission::finish_submit(result);
                        if finish.reset_form {
                            form.update(FormState::reset);
                        }
                        let success =
                            finish.message.kind == crate::state::feedback::MessageKind::Success;
                        let mut epoch = 0;
                        feedback.update(|f| epoch = f.show(finish.message));

                        if success {
                            leptos::task::spawn_local(async move {
                                gloo_timers::future::sleep(std::time::Duration::from_millis(
                                    SUCCESS_DISMISS_MS,
                                ))
                                .await;
                                feedback.update(|f| f.dismiss_success(epoch));
                            });
                        }
                        if finish.refresh_roster {
                            load_roster(config, roster).await;
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (&config, &new_student, &roster);
                }
            }
        }
    });

    view! {
        <div class="app">
            <div class="container">
                <header class="header">
                    <h1>"Student Data Entry"</h1>
                    <p>"Enter student information below"</p>
                </header>

                <StudentForm on_submit=on_submit/>
                <StudentList/>
            </div>
        </div>
    }
}
