//! REST API helpers for the student service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` with display-ready text: create failures
//! prefer the service's `detail` field so the form can echo it verbatim,
//! list failures are logged by the caller and never shown to the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{NewStudent, Student};
use crate::config::ApiConfig;

/// Fallback shown when a create fails without a usable `detail`.
pub const CREATE_FALLBACK_MESSAGE: &str = "Failed to save student data. Please try again.";

/// Extract the display message from a failed create response body.
///
/// The service reports errors as `{"detail": "..."}`; that text is used
/// verbatim when present, otherwise the generic fallback applies.
#[cfg(any(test, feature = "hydrate"))]
fn create_error_message(body: &str) -> String {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        detail: Option<String>,
    }
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { detail: Some(detail) }) if !detail.is_empty() => detail,
        _ => CREATE_FALLBACK_MESSAGE.to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn list_failed_message(status: u16) -> String {
    format!("student list request failed: {status}")
}

/// Fetch the full roster via `GET /api/students`.
///
/// # Errors
///
/// Returns display-ready text when the request or decode fails; the caller
/// keeps its previous roster in that case.
pub async fn fetch_students(config: &ApiConfig) -> Result<Vec<Student>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.students_endpoint())
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_failed_message(resp.status()));
        }
        resp.json::<Vec<Student>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err("not available on server".to_owned())
    }
}

/// Register a student via `POST /api/students`.
///
/// The created record in the response body is unused; the caller re-fetches
/// the roster instead.
///
/// # Errors
///
/// Returns the service `detail` text when the error body carries one, else
/// the generic fallback.
pub async fn create_student(config: &ApiConfig, student: &NewStudent) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&config.students_endpoint())
            .json(student)
            .map_err(|_| CREATE_FALLBACK_MESSAGE.to_owned())?
            .send()
            .await
            .map_err(|_| CREATE_FALLBACK_MESSAGE.to_owned())?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(create_error_message(&body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, student);
        Err("not available on server".to_owned())
    }
}
