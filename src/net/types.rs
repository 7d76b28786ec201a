//! Wire DTOs for the student service boundary.
//!
//! DESIGN
//! ======
//! These types mirror the service's JSON payloads so serde stays lossless;
//! the client never reinterprets fields beyond display formatting.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A registered student as returned by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Row identifier assigned by the service.
    pub id: i64,
    /// Student's full name.
    pub name: String,
    /// Father's full name.
    pub father_name: String,
    /// Contact email address.
    pub email: String,
    /// Creation timestamp, ISO-8601 as emitted by the service.
    pub created_at: String,
}

/// Payload for registering a new student.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewStudent {
    pub name: String,
    pub father_name: String,
    pub email: String,
}
