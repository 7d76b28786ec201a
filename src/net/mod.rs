//! Networking modules for the student service REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `types` defines the wire schema shared with
//! the service.

pub mod api;
pub mod types;
