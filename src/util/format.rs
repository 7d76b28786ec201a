//! Timestamp presentation helpers.
//!
//! Client-side (hydrate): defers to the browser's locale machinery so the
//! registration time reads like "January 5, 2024, 10:24 AM". Non-browser
//! builds pass the raw timestamp through unchanged.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format an ISO-8601 timestamp as a long localized date and time.
///
/// Unparseable input is returned unchanged rather than rendered as
/// "Invalid Date".
pub fn format_created_at(created_at: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let parsed = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(created_at));
        if parsed.get_time().is_nan() {
            return created_at.to_owned();
        }
        let options = js_sys::Object::new();
        for (key, value) in [
            ("year", "numeric"),
            ("month", "long"),
            ("day", "numeric"),
            ("hour", "2-digit"),
            ("minute", "2-digit"),
        ] {
            let _ = js_sys::Reflect::set(
                &options,
                &wasm_bindgen::JsValue::from_str(key),
                &wasm_bindgen::JsValue::from_str(value),
            );
        }
        parsed
            .to_locale_string("en-US", &options)
            .as_string()
            .unwrap_or_else(|| created_at.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        created_at.to_owned()
    }
}
