//! Card presentation for a single registered student.

use leptos::prelude::*;

use crate::net::types::Student;
use crate::util::format::format_created_at;

/// One roster entry: name, parentage, contact, and registration time.
#[component]
pub fn StudentCard(student: Student) -> impl IntoView {
    let created = format_created_at(&student.created_at);

    view! {
        <div class="student-card">
            <div class="student-info">
                <h3>{student.name}</h3>
                <p>
                    <strong>"Father: "</strong>
                    {student.father_name}
                </p>
                <p>
                    <strong>"Email: "</strong>
                    {student.email}
                </p>
                <p class="student-date">{created}</p>
            </div>
        </div>
    }
}
