//! In-memory host for tests and native demos
//!
//! [`SimulatedHost`] records subscriptions, lets a test deliver entry batches
//! by hand, fire the document lifecycle events and advance a virtual clock.
//! Callbacks always run with the host lock released, so they may register
//! further work on the same host.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

use super::{EntryCallback, PageLifecycle, PerformanceHost, ReadyState, Task};
use crate::entry::{EntryType, NavigationTiming, PerformanceEntry};
use crate::error::ObserveError;

struct Subscription {
    entry_type: EntryType,
    buffered: bool,
    callback: Arc<Mutex<EntryCallback>>,
}

struct Timer {
    due: Duration,
    seq: u64,
    task: Task,
}

struct Inner {
    unsupported: HashMap<EntryType, String>,
    subscriptions: Vec<Subscription>,
    history: Vec<PerformanceEntry>,
    navigation: Option<NavigationTiming>,
    navigation_reads: usize,
    ready_state: ReadyState,
    dom_content_loaded: Vec<Task>,
    load: Vec<Task>,
    now: Duration,
    next_seq: u64,
    timers: Vec<Timer>,
}

/// Cloneable handle to a simulated page; clones share state
#[derive(Clone)]
pub struct SimulatedHost {
    inner: Arc<Mutex<Inner>>,
}

impl std::fmt::Debug for SimulatedHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("SimulatedHost")
            .field("ready_state", &inner.ready_state)
            .field("subscriptions", &inner.subscriptions.len())
            .field("pending_timers", &inner.timers.len())
            .field("now", &inner.now)
            .finish()
    }
}

impl Default for SimulatedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedHost {
    /// A page that is still loading, supports every entry type and has no navigation record
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                unsupported: HashMap::new(),
                subscriptions: Vec::new(),
                history: Vec::new(),
                navigation: None,
                navigation_reads: 0,
                ready_state: ReadyState::Loading,
                dom_content_loaded: Vec::new(),
                load: Vec::new(),
                now: Duration::ZERO,
                next_seq: 0,
                timers: Vec::new(),
            })),
        }
    }

    /// Make registration of `entry_type` fail
    pub fn set_unsupported(&self, entry_type: EntryType, reason: impl Into<String>) {
        self.inner.lock().unsupported.insert(entry_type, reason.into());
    }

    pub fn set_navigation_timing(&self, timing: NavigationTiming) {
        self.inner.lock().navigation = Some(timing);
    }

    pub fn set_ready_state(&self, state: ReadyState) {
        self.inner.lock().ready_state = state;
    }

    /// Number of active subscriptions across all entry types
    pub fn subscription_count(&self) -> usize {
        self.inner.lock().subscriptions.len()
    }

    pub fn is_subscribed(&self, entry_type: EntryType) -> bool {
        self.inner
            .lock()
            .subscriptions
            .iter()
            .any(|s| s.entry_type == entry_type)
    }

    /// Whether the subscription for `entry_type` asked for buffered replay
    pub fn is_buffered(&self, entry_type: EntryType) -> bool {
        self.inner
            .lock()
            .subscriptions
            .iter()
            .any(|s| s.entry_type == entry_type && s.buffered)
    }

    /// How many times the navigation record has been read
    pub fn navigation_reads(&self) -> usize {
        self.inner.lock().navigation_reads
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.lock().timers.len()
    }

    /// Virtual time elapsed since the host was created
    pub fn now(&self) -> Duration {
        self.inner.lock().now
    }

    /// Record entries that happened before anyone subscribed
    ///
    /// Buffered subscriptions registered later receive them as one batch.
    pub fn record_history(&self, entries: Vec<PerformanceEntry>) {
        self.inner.lock().history.extend(entries);
    }

    /// Deliver one batch to every subscriber of `entry_type`
    ///
    /// Entries of other types in the batch are passed through unchanged; the
    /// batch also joins the history for later buffered subscribers.
    pub fn deliver(&self, entry_type: EntryType, batch: Vec<PerformanceEntry>) {
        let callbacks: Vec<_> = {
            let mut inner = self.inner.lock();
            inner.history.extend(batch.iter().cloned());
            inner
                .subscriptions
                .iter()
                .filter(|s| s.entry_type == entry_type)
                .map(|s| Arc::clone(&s.callback))
                .collect()
        };
        trace!(%entry_type, entries = batch.len(), subscribers = callbacks.len(), "delivering batch");
        for callback in callbacks {
            let mut callback = callback.lock();
            (*callback)(&batch);
        }
    }

    /// Mark the document parsed and run `DOMContentLoaded` listeners
    pub fn fire_dom_content_loaded(&self) {
        let tasks = {
            let mut inner = self.inner.lock();
            inner.ready_state = ReadyState::Interactive;
            std::mem::take(&mut inner.dom_content_loaded)
        };
        for task in tasks {
            task();
        }
    }

    /// Mark the page complete and run `load` listeners
    pub fn fire_load(&self) {
        let tasks = {
            let mut inner = self.inner.lock();
            inner.ready_state = ReadyState::Complete;
            std::mem::take(&mut inner.load)
        };
        for task in tasks {
            task();
        }
    }

    /// Move the virtual clock forward, running every timer that falls due in order
    pub fn advance(&self, by: Duration) {
        let target = self.inner.lock().now + by;
        loop {
            let next = {
                let mut inner = self.inner.lock();
                let due = inner
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.seq))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let timer = inner.timers.remove(i);
                        inner.now = timer.due;
                        Some(timer.task)
                    }
                    None => {
                        inner.now = target;
                        None
                    }
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }
}

impl PerformanceHost for SimulatedHost {
    fn observe(
        &self,
        entry_type: EntryType,
        buffered: bool,
        callback: EntryCallback,
    ) -> Result<(), ObserveError> {
        let (callback, replay) = {
            let mut inner = self.inner.lock();
            if let Some(reason) = inner.unsupported.get(&entry_type) {
                return Err(ObserveError::unsupported(entry_type, reason.clone()));
            }
            let callback = Arc::new(Mutex::new(callback));
            inner.subscriptions.push(Subscription {
                entry_type,
                buffered,
                callback: Arc::clone(&callback),
            });
            let replay: Vec<_> = if buffered {
                inner
                    .history
                    .iter()
                    .filter(|e| e.entry_type() == entry_type)
                    .cloned()
                    .collect()
            } else {
                Vec::new()
            };
            (callback, replay)
        };
        if !replay.is_empty() {
            let mut callback = callback.lock();
            (*callback)(&replay);
        }
        Ok(())
    }

    fn navigation_timing(&self) -> Result<Option<NavigationTiming>, ObserveError> {
        let mut inner = self.inner.lock();
        inner.navigation_reads += 1;
        if let Some(reason) = inner.unsupported.get(&EntryType::Navigation) {
            return Err(ObserveError::unsupported(EntryType::Navigation, reason.clone()));
        }
        Ok(inner.navigation)
    }
}

impl PageLifecycle for SimulatedHost {
    fn ready_state(&self) -> ReadyState {
        self.inner.lock().ready_state
    }

    fn on_dom_content_loaded(&self, task: Task) {
        self.inner.lock().dom_content_loaded.push(task);
    }

    fn on_load(&self, task: Task) {
        self.inner.lock().load.push(task);
    }

    fn set_timeout(&self, delay: Duration, task: Task) {
        let mut inner = self.inner.lock();
        let due = inner.now + delay;
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.timers.push(Timer { due, seq, task });
    }
}
