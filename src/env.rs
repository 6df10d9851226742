//! Tizen TV runtime detection.
//!
//! Detection is a pure predicate re-evaluated wherever it is needed; nothing
//! is cached, so a host that defines the `tizen` global late is still picked
//! up by later checks.

use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::Window;

/// User-agent markers advertised by Samsung TV browsers.
const UA_MARKERS: [&str; 2] = ["Tizen", "SMART-TV"];

/// Viewport applied on TVs regardless of the reported device resolution.
pub const TV_VIEWPORT_CONTENT: &str = "width=1920, height=1080, user-scalable=no";

/// True when the user-agent string identifies a Tizen / Samsung smart TV.
pub fn ua_is_tv(ua: &str) -> bool {
    UA_MARKERS.iter().any(|m| ua.contains(m))
}

/// True when the page is running inside a Tizen TV host: either the `tizen`
/// platform global exists on `window`, or the user agent carries a TV marker.
pub fn is_tv_runtime(window: &Window) -> bool {
    if Reflect::has(window.as_ref(), &JsValue::from_str("tizen")).unwrap_or(false) {
        return true;
    }
    window
        .navigator()
        .user_agent()
        .map(|ua| ua_is_tv(&ua))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smart_tv_marker_detected() {
        assert!(ua_is_tv(
            "Mozilla/5.0 (SMART-TV; Linux; Tizen 6.5) AppleWebKit/537.36"
        ));
    }

    #[test]
    fn vendor_marker_alone_detected() {
        assert!(ua_is_tv("Mozilla/5.0 (Linux; Tizen 5.0) SamsungBrowser/2.2"));
    }

    #[test]
    fn desktop_ua_not_detected() {
        assert!(!ua_is_tv(
            "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 Chrome/120.0 Safari/537.36"
        ));
    }

    #[test]
    fn tv_viewport_is_fixed_fullhd() {
        assert_eq!(TV_VIEWPORT_CONTENT, "width=1920, height=1080, user-scalable=no");
    }
}
