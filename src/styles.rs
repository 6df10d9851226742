//! Style blocks injected into the page head.

use wasm_bindgen::JsValue;
use web_sys::Document;

/// CSS class toggled on the element under an active touch.
pub const TOUCH_ACTIVE_CLASS: &str = "touch-active";

/// Touch feedback and touch-target sizing for the large touch TVs.
pub const TOUCH_FEEDBACK_CSS: &str = r#"
/* touch feedback */
.touch-active {
    opacity: 0.7 !important;
    transform: scale(0.98) !important;
    transition: opacity 0.1s, transform 0.1s !important;
}

/* touch targets: 48px minimum */
button, a, [role="button"], .clickable, .touchable {
    min-width: 48px !important;
    min-height: 48px !important;
    touch-action: manipulation;
}

/* drop the default touch highlight */
* {
    -webkit-tap-highlight-color: transparent;
    -webkit-touch-callout: none;
    -webkit-user-select: none;
    user-select: none;
}

.scrollable {
    -webkit-overflow-scrolling: touch;
    overflow-scrolling: touch;
}

/* larger targets on the TV panel itself */
@media (min-width: 1920px) {
    button, [role="button"] {
        min-width: 64px !important;
        min-height: 64px !important;
        font-size: 18px !important;
    }
}
"#;

/// Animation smoothing for the hosted chart surface, applied once the
/// renderer signals its first frame.
pub const CHART_SMOOTHING_CSS: &str = r#"
.fl-chart-line {
    will-change: transform;
    transform: translateZ(0);
}
* {
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}
"#;

/// Append a `<style>` block with the given rules to the document head.
pub fn inject(document: &Document, css: &str) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(css));
    let head = document.head().ok_or_else(|| JsValue::from_str("no head"))?;
    head.append_child(&style)?;
    Ok(())
}
