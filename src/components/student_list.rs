//! Roster section listing registered students.

use leptos::prelude::*;

use crate::components::student_card::StudentCard;
use crate::state::roster::RosterState;

/// Registered students section: an empty-state notice, or one card per
/// student in the order the service returned them.
#[component]
pub fn StudentList() -> impl IntoView {
    let roster = expect_context::<RwSignal<RosterState>>();

    view! {
        <div class="students-list">
            <h2>"Registered Students"</h2>
            {move || {
                let students = roster.get().students;
                if students.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <p>"No students registered yet. Submit the form above to add students."</p>
                        </div>
                    }
                        .into_any();
                }

                view! {
                    <div class="students-grid">
                        {students
                            .into_iter()
                            .map(|student| view! { <StudentCard student=student/> })
                            .collect::<Vec<_>>()}
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
