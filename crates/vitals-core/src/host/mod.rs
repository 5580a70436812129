//! Host environment seams
//!
//! The collector never talks to a browser directly. A host provides the
//! performance timeline ([`PerformanceHost`]) and the document lifecycle plus
//! timers ([`PageLifecycle`]). The wasm bindings implement both over `web-sys`;
//! [`simulated::SimulatedHost`] implements them in memory for tests.

pub mod simulated;

use std::time::Duration;

use crate::entry::{EntryType, NavigationTiming, PerformanceEntry};
use crate::error::ObserveError;

/// Receives each batch of entries delivered for one subscription
pub type EntryCallback = Box<dyn FnMut(&[PerformanceEntry]) + Send>;

/// Deferred work handed to the host's event loop
pub type Task = Box<dyn FnOnce() + Send>;

/// Access to the host's performance timeline
pub trait PerformanceHost {
    /// Subscribe to one entry stream.
    ///
    /// With `buffered` set, entries that occurred before the subscription are
    /// replayed. Fails synchronously when the host does not implement the
    /// entry type; there is no unsubscribe.
    fn observe(
        &self,
        entry_type: EntryType,
        buffered: bool,
        callback: EntryCallback,
    ) -> Result<(), ObserveError>;

    /// One-shot read of the navigation timing record, `None` if there is none
    fn navigation_timing(&self) -> Result<Option<NavigationTiming>, ObserveError>;
}

/// Document loading state, as in `document.readyState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    pub fn parse(s: &str) -> Self {
        match s {
            "loading" => ReadyState::Loading,
            "interactive" => ReadyState::Interactive,
            _ => ReadyState::Complete,
        }
    }
}

/// Document lifecycle events and fire-and-forget timers
pub trait PageLifecycle {
    fn ready_state(&self) -> ReadyState;

    /// Run `task` once the document has been parsed (`DOMContentLoaded`)
    fn on_dom_content_loaded(&self, task: Task);

    /// Run `task` once the page has fully loaded (`load`)
    fn on_load(&self, task: Task);

    /// Run `task` after `delay`; never blocks the caller
    fn set_timeout(&self, delay: Duration, task: Task);
}
