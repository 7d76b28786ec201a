//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the form and roster surfaces while reading/writing
//! shared state from Leptos context providers.

pub mod student_card;
pub mod student_form;
pub mod student_list;
