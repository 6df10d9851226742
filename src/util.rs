// Console logging helpers shared by the adapter modules.

use wasm_bindgen::JsValue;

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Log a message followed by a raw JS value (caught exceptions, etc.).
pub fn clog_err(msg: &str, err: &JsValue) {
    web_sys::console::log_2(&JsValue::from_str(msg), err);
}
