//! Browser console output for the performance monitor

use vitals_core::console::{DiagnosticConsole, SummaryTable};
use web_sys::console;

/// Writes to the browser's `console.*`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl DiagnosticConsole for BrowserConsole {
    fn info(&self, message: &str) {
        console::info_1(&message.into());
    }

    fn warn(&self, message: &str) {
        console::warn_1(&message.into());
    }

    fn summary(&self, label: &str, table: &SummaryTable) {
        console::group_1(&label.into());
        match serde_wasm_bindgen::to_value(&table.rows) {
            Ok(rows) => console::table_1(&rows),
            Err(_) => console::log_1(&table.render().into()),
        }
        console::group_end();
    }
}
