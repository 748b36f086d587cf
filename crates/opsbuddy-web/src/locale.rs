//! Browser Locale Clock
//!
//! Footer time in the viewer's own locale convention. The browser decides
//! between 12 and 24 hour clocks; outside WASM the fixed core format is used.

use chrono::{DateTime, Utc};

#[cfg(target_arch = "wasm32")]
const FALLBACK_LOCALE: &str = "en-US";

/// Two-digit hour and minute in the viewer's locale and time zone
#[cfg(target_arch = "wasm32")]
pub fn local_time_label(timestamp: DateTime<Utc>) -> String {
    use wasm_bindgen::JsValue;

    let locale = web_sys::window()
        .and_then(|w| w.navigator().language())
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string());

    let options = js_sys::Object::new();
    let two_digit = JsValue::from_str("2-digit");
    let configured = ["hour", "minute"].iter().all(|key| {
        js_sys::Reflect::set(&options, &JsValue::from_str(key), &two_digit).unwrap_or(false)
    });
    if !configured {
        tracing::debug!(%locale, "locale options rejected, using fixed clock format");
        return opsbuddy_core::clock_label(timestamp);
    }

    #[allow(clippy::cast_precision_loss)]
    let millis = timestamp.timestamp_millis() as f64;
    js_sys::Date::new(&JsValue::from_f64(millis))
        .to_locale_time_string_with_options(&locale, &options)
        .into()
}

/// Two-digit hour and minute in the host's local time zone
#[cfg(not(target_arch = "wasm32"))]
pub fn local_time_label(timestamp: DateTime<Utc>) -> String {
    opsbuddy_core::clock_label(timestamp)
}
