//! Shared test fixtures: a console that records every call

#![allow(dead_code)]

use parking_lot::Mutex;
use std::sync::Arc;
use vitals_core::console::{DiagnosticConsole, SummaryTable};
use vitals_core::host::simulated::SimulatedHost;
use vitals_core::{MonitorConfig, PerformanceMonitor};

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCall {
    Info(String),
    Warn(String),
    Summary(String, SummaryTable),
}

#[derive(Debug, Default)]
pub struct RecordingConsole {
    calls: Mutex<Vec<ConsoleCall>>,
}

impl RecordingConsole {
    pub fn calls(&self) -> Vec<ConsoleCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ConsoleCall::Warn(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ConsoleCall::Info(msg) => Some(msg),
                _ => None,
            })
            .collect()
    }

    pub fn summaries(&self) -> Vec<SummaryTable> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ConsoleCall::Summary(_, table) => Some(table),
                _ => None,
            })
            .collect()
    }
}

impl DiagnosticConsole for RecordingConsole {
    fn info(&self, message: &str) {
        self.calls.lock().push(ConsoleCall::Info(message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.calls.lock().push(ConsoleCall::Warn(message.to_string()));
    }

    fn summary(&self, label: &str, table: &SummaryTable) {
        self.calls
            .lock()
            .push(ConsoleCall::Summary(label.to_string(), table.clone()));
    }
}

/// A development monitor wired to a fresh simulated page and recording console
pub fn dev_setup() -> (PerformanceMonitor, SimulatedHost, Arc<RecordingConsole>) {
    setup(MonitorConfig::development())
}

pub fn setup(config: MonitorConfig) -> (PerformanceMonitor, SimulatedHost, Arc<RecordingConsole>) {
    init_tracing();
    let console = Arc::new(RecordingConsole::default());
    let monitor = PerformanceMonitor::new(config, console.clone());
    (monitor, SimulatedHost::new(), console)
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
