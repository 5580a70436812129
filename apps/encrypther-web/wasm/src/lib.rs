//! WASM bindings for the EncryptHer site
//!
//! Runs the Core Web Vitals monitor in the browser and exposes the site
//! configuration to page scripts.
//!
//! ## Architecture
//!
//! - [`host::BrowserHost`] implements the collector's host traits over `web-sys`
//! - [`console::BrowserConsole`] sends monitor output to `console.*`
//! - One process-wide monitor lives for the page; callers only ever get copies
//!   of its snapshot
//!
//! In debug builds the module starts monitoring on load; release builds leave
//! the monitor inert.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { getMetrics, logSummary, getEnabledPlatforms } from './pkg/encrypther_wasm.js';
//!
//! await init();                 // auto-starts monitoring in development
//! const metrics = getMetrics(); // { lcp: 1200, cls: 0.02, ... }
//! logSummary();
//!
//! for (const platform of getEnabledPlatforms()) {
//!     renderFooterIcon(platform.icon, platform.url, platform.aria_label);
//! }
//! ```

pub mod console;
pub mod host;
pub mod site;

use lazy_static::lazy_static;
use std::sync::Arc;
use vitals_core::{MonitorConfig, PerformanceMonitor};
use wasm_bindgen::prelude::*;

pub use console::BrowserConsole;
pub use host::BrowserHost;

lazy_static! {
    static ref MONITOR: PerformanceMonitor =
        PerformanceMonitor::new(MonitorConfig::for_build(), Arc::new(BrowserConsole));
}

/// Initialize the WASM module
/// Called automatically by wasm-bindgen
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    MONITOR.auto_start(&BrowserHost);
}

/// Register the Core Web Vitals trackers (no-op in release builds or when already running)
#[wasm_bindgen(js_name = initPerformanceMonitoring)]
pub fn init_performance_monitoring() {
    MONITOR.initialize(&BrowserHost);
}

/// Copy of the metrics recorded so far; unrecorded metrics are absent
#[wasm_bindgen(js_name = getMetrics)]
pub fn get_metrics() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&MONITOR.get_metrics())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Print the metrics table to the console (development builds only)
#[wasm_bindgen(js_name = logSummary)]
pub fn log_summary() {
    MONITOR.log_summary();
}

/// Get the library version
#[wasm_bindgen]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_version() {
        let version = get_version();
        assert!(!version.is_empty());
    }

    #[test]
    fn test_monitor_follows_build_profile() {
        assert_eq!(MONITOR.config().debug, cfg!(debug_assertions));
        assert!(MONITOR.get_metrics().is_empty());
    }
}
