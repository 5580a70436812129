//! Browser tests, run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use encrypther_wasm::host::entry_from_js;
use encrypther_wasm::BrowserHost;
use js_sys::{Object, Reflect};
use vitals_core::entry::{EntryType, PerformanceEntry};
use vitals_core::host::{PageLifecycle, PerformanceHost};
use vitals_core::trackers::lcp_from_batch;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn js_object(fields: &[(&str, JsValue)]) -> JsValue {
    let obj = Object::new();
    for (key, value) in fields {
        Reflect::set(&obj, &JsValue::from_str(key), value).unwrap();
    }
    obj.into()
}

#[wasm_bindgen_test]
fn lcp_entry_without_render_time_uses_load_time() {
    let entry = js_object(&[
        ("renderTime", JsValue::from_f64(0.0)),
        ("loadTime", JsValue::from_f64(1450.0)),
    ]);
    let converted = entry_from_js(EntryType::LargestContentfulPaint, &entry);
    assert_eq!(converted, Some(PerformanceEntry::lcp(Some(0.0), 1450.0)));
    assert_eq!(lcp_from_batch(&[converted.unwrap()]), Some(1450.0));
}

#[wasm_bindgen_test]
fn layout_shift_entry_conversion() {
    let entry = js_object(&[
        ("value", JsValue::from_f64(0.08)),
        ("hadRecentInput", JsValue::TRUE),
    ]);
    assert_eq!(
        entry_from_js(EntryType::LayoutShift, &entry),
        Some(PerformanceEntry::layout_shift(0.08, true))
    );
}

#[wasm_bindgen_test]
fn paint_entry_requires_name() {
    let entry = js_object(&[("startTime", JsValue::from_f64(300.0))]);
    assert_eq!(entry_from_js(EntryType::Paint, &entry), None);
}

#[wasm_bindgen_test]
fn browser_supports_paint_observation() {
    let result = BrowserHost.observe(EntryType::Paint, true, Box::new(|_: &[PerformanceEntry]| {}));
    assert!(result.is_ok());
}

#[wasm_bindgen_test]
fn navigation_timing_is_readable() {
    assert!(BrowserHost.navigation_timing().is_ok());
    let _ = BrowserHost.ready_state();
}
