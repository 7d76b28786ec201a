//! API endpoint configuration.
//!
//! DESIGN
//! ======
//! The student service base URL is resolved once at startup and handed to the
//! component tree through Leptos context, so no module reads a global at call
//! time and tests can construct arbitrary bases.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base-URL configuration for the student service.
///
/// An empty base means same-origin relative requests, the default when the
/// app is served behind the same host as the API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ApiConfig {
    api_base: String,
}

impl ApiConfig {
    /// Build a config from an explicit base URL. Trailing slashes are
    /// stripped so endpoint concatenation stays canonical.
    pub fn new(api_base: impl Into<String>) -> Self {
        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }
        Self { api_base }
    }

    /// Resolve the startup configuration: a `STUDENT_API_BASE` compile-time
    /// override when present, else same-origin relative paths.
    pub fn resolve() -> Self {
        Self::new(option_env!("STUDENT_API_BASE").unwrap_or(""))
    }

    /// The students collection endpoint, shared by list and create.
    pub fn students_endpoint(&self) -> String {
        format!("{}/api/students", self.api_base)
    }
}
