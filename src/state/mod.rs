//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`form`, `feedback`, `submission`, `roster`) so
//! individual components can depend on small focused models. Transitions are
//! plain functions over plain structs; pages lift them into `RwSignal`s.

pub mod feedback;
pub mod form;
pub mod roster;
pub mod submission;
