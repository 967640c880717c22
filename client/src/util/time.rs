//! Browser clock helpers with inert native fallbacks.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

/// Current time in milliseconds since the Unix epoch; zero off-browser.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Format a millisecond timestamp as a local `HH:MM` label.
///
/// Off-browser there is no local clock to consult, so the label is empty.
#[must_use]
pub fn clock_label(timestamp: f64) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(timestamp));
        format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = timestamp;
        String::new()
    }
}
