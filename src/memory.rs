//! Heap-usage diagnostics.
//!
//! `performance.memory` is a nonstandard Chromium/Tizen extension, so it is
//! read through `js_sys::Reflect` rather than a typed web-sys binding. Figures
//! are reported as whole megabytes, matching what the TV console shows.

use js_sys::Reflect;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::Window;

const BYTES_PER_MB: f64 = 1_048_576.0;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeapStats {
    pub used: String,
    pub total: String,
    pub limit: String,
}

impl HeapStats {
    pub fn from_bytes(used: f64, total: f64, limit: f64) -> Self {
        Self {
            used: format_mb(used),
            total: format_mb(total),
            limit: format_mb(limit),
        }
    }
}

fn format_mb(bytes: f64) -> String {
    format!("{}MB", (bytes / BYTES_PER_MB).round() as u64)
}

/// Snapshot of `performance.memory`, or `None` when the host does not expose
/// heap introspection.
pub fn read_heap_stats(window: &Window) -> Option<HeapStats> {
    let perf = window.performance()?;
    let memory = Reflect::get(perf.as_ref(), &JsValue::from_str("memory")).ok()?;
    if memory.is_undefined() || memory.is_null() {
        return None;
    }
    let field = |name: &str| -> Option<f64> {
        Reflect::get(&memory, &JsValue::from_str(name)).ok()?.as_f64()
    };
    Some(HeapStats::from_bytes(
        field("usedJSHeapSize")?,
        field("totalJSHeapSize")?,
        field("jsHeapSizeLimit")?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_round_to_whole_megabytes() {
        assert_eq!(format_mb(50_331_648.0), "48MB");
        assert_eq!(format_mb(0.0), "0MB");
        // rounds, not truncates
        assert_eq!(format_mb(1_572_864.0), "2MB");
    }

    #[test]
    fn stats_serialize_inline() {
        let stats = HeapStats::from_bytes(50_331_648.0, 67_108_864.0, 268_435_456.0);
        let json = serde_json::to_string(&stats).expect("serialize");
        assert_eq!(json, r#"{"used":"48MB","total":"64MB","limit":"256MB"}"#);
    }
}
