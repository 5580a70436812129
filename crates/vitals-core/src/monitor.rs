//! The performance monitor
//!
//! [`PerformanceMonitor`] owns the page's [`MetricsSnapshot`], registers the
//! trackers against a host, and prints a summary shortly after the page loads.
//! All behaviour is gated by [`MonitorConfig::debug`]: with the flag off the
//! monitor registers nothing and never touches the console.

use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

use crate::config::MonitorConfig;
use crate::console::{DiagnosticConsole, SummaryTable, LOG_PREFIX};
use crate::host::{PageLifecycle, PerformanceHost, ReadyState};
use crate::metrics::{Metric, MetricsSnapshot};
use crate::trackers::{Recorder, Tracker, TrackerStatus};

/// What a call to [`PerformanceMonitor::initialize`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    /// Debug flag off, nothing registered
    Disabled,
    /// An earlier call already registered the trackers
    AlreadyInitialized,
    Initialized,
}

/// Per-tracker registration results of one initialisation
#[derive(Debug, Clone, PartialEq)]
pub struct InitReport {
    pub outcome: InitOutcome,
    /// Tracker results in registration order; empty unless `Initialized`
    pub trackers: Vec<(Metric, TrackerStatus)>,
}

impl InitReport {
    fn skipped(outcome: InitOutcome) -> Self {
        Self {
            outcome,
            trackers: Vec::new(),
        }
    }

    pub fn status(&self, metric: Metric) -> Option<&TrackerStatus> {
        self.trackers
            .iter()
            .find(|(m, _)| *m == metric)
            .map(|(_, status)| status)
    }

    /// Metrics whose tracker the host rejected
    pub fn unsupported(&self) -> Vec<Metric> {
        self.trackers
            .iter()
            .filter(|(_, status)| !status.is_active())
            .map(|(m, _)| *m)
            .collect()
    }
}

/// Result of [`PerformanceMonitor::auto_start`]
#[derive(Debug, Clone, PartialEq)]
pub enum AutoStart {
    Disabled,
    /// Initialisation waits for `DOMContentLoaded`
    Deferred,
    Started(InitReport),
}

struct Inner {
    config: MonitorConfig,
    snapshot: Arc<Mutex<MetricsSnapshot>>,
    console: Arc<dyn DiagnosticConsole>,
    initialized: AtomicBool,
}

/// Collects Core Web Vitals for the lifetime of a page
///
/// Cloning is cheap and clones share the same snapshot.
#[derive(Clone)]
pub struct PerformanceMonitor {
    inner: Arc<Inner>,
}

impl fmt::Debug for PerformanceMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PerformanceMonitor")
            .field("config", &self.inner.config)
            .field("initialized", &self.is_initialized())
            .field("metrics", &self.get_metrics())
            .finish()
    }
}

impl PerformanceMonitor {
    pub fn new(config: MonitorConfig, console: Arc<dyn DiagnosticConsole>) -> Self {
        Self {
            inner: Arc::new(Inner {
                config,
                snapshot: Arc::new(Mutex::new(MetricsSnapshot::default())),
                console,
                initialized: AtomicBool::new(false),
            }),
        }
    }

    pub fn config(&self) -> &MonitorConfig {
        &self.inner.config
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.initialized.load(Ordering::SeqCst)
    }

    /// Register all five trackers and schedule the summary log.
    ///
    /// Does nothing unless the debug flag is set, and nothing on repeated
    /// calls. A tracker the host rejects is reported in the returned
    /// [`InitReport`] and warned about on the console; it never stops the
    /// others from registering.
    #[instrument(skip(self, host))]
    pub fn initialize<H>(&self, host: &H) -> InitReport
    where
        H: PerformanceHost + PageLifecycle + Clone + Send + 'static,
    {
        if !self.inner.config.debug {
            trace!("performance monitoring disabled");
            return InitReport::skipped(InitOutcome::Disabled);
        }
        if self.inner.initialized.swap(true, Ordering::SeqCst) {
            debug!("performance monitoring already initialized");
            return InitReport::skipped(InitOutcome::AlreadyInitialized);
        }

        let console = &self.inner.console;
        console.info(&format!(
            "{} Monitoring enabled (development mode only)",
            LOG_PREFIX
        ));

        let recorder = Recorder::new(
            Arc::clone(&self.inner.snapshot),
            Arc::clone(console),
            self.inner.config.debug,
        );
        let mut trackers = Vec::with_capacity(Tracker::ALL.len());
        for tracker in Tracker::ALL {
            let metric = tracker.metric();
            let status = tracker.register(host, recorder.clone());
            if let TrackerStatus::Unsupported(ref error) = status {
                console.warn(&format!(
                    "{} {} tracking not supported: {}",
                    LOG_PREFIX,
                    metric.short_name(),
                    error
                ));
            }
            trackers.push((metric, status));
        }

        self.schedule_summary(host);

        debug!(
            active = trackers.iter().filter(|(_, s)| s.is_active()).count(),
            "performance monitoring initialized"
        );
        InitReport {
            outcome: InitOutcome::Initialized,
            trackers,
        }
    }

    /// Initialise now, or on `DOMContentLoaded` while the document is still loading
    pub fn auto_start<H>(&self, host: &H) -> AutoStart
    where
        H: PerformanceHost + PageLifecycle + Clone + Send + 'static,
    {
        if !self.inner.config.debug {
            return AutoStart::Disabled;
        }
        if host.ready_state() == ReadyState::Loading {
            let monitor = self.clone();
            let deferred_host = host.clone();
            host.on_dom_content_loaded(Box::new(move || {
                monitor.initialize(&deferred_host);
            }));
            AutoStart::Deferred
        } else {
            AutoStart::Started(self.initialize(host))
        }
    }

    /// Copy of the current metrics; later recordings do not affect it
    pub fn get_metrics(&self) -> MetricsSnapshot {
        *self.inner.snapshot.lock()
    }

    /// Print the current snapshot as a table under `[Performance] Summary`
    pub fn log_summary(&self) {
        if !self.inner.config.debug {
            return;
        }
        let table = SummaryTable::from_snapshot(&self.get_metrics());
        self.inner
            .console
            .summary(&format!("{} Summary", LOG_PREFIX), &table);
    }

    /// Summary fires `summary_delay` after `load`, or from now if the page already loaded
    fn schedule_summary<H>(&self, host: &H)
    where
        H: PageLifecycle + Clone + Send + 'static,
    {
        let delay = self.inner.config.summary_delay();
        let monitor = self.clone();
        if host.ready_state() == ReadyState::Complete {
            host.set_timeout(delay, Box::new(move || monitor.log_summary()));
        } else {
            let timer_host = host.clone();
            host.on_load(Box::new(move || {
                timer_host.set_timeout(delay, Box::new(move || monitor.log_summary()));
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TracingConsole;
    use crate::host::simulated::SimulatedHost;

    #[test]
    fn test_disabled_monitor_is_inert() {
        let host = SimulatedHost::new();
        let monitor = PerformanceMonitor::new(MonitorConfig::production(), Arc::new(TracingConsole));

        let report = monitor.initialize(&host);
        assert_eq!(report.outcome, InitOutcome::Disabled);
        assert!(report.trackers.is_empty());
        assert_eq!(host.subscription_count(), 0);
        assert_eq!(host.pending_timers(), 0);
        assert!(!monitor.is_initialized());
    }

    #[test]
    fn test_second_initialize_is_noop() {
        let host = SimulatedHost::new();
        let monitor = PerformanceMonitor::new(MonitorConfig::development(), Arc::new(TracingConsole));

        assert_eq!(monitor.initialize(&host).outcome, InitOutcome::Initialized);
        assert_eq!(host.subscription_count(), 4);
        assert_eq!(
            monitor.initialize(&host).outcome,
            InitOutcome::AlreadyInitialized
        );
        assert_eq!(host.subscription_count(), 4);
    }

    #[test]
    fn test_report_lists_trackers_in_order() {
        let host = SimulatedHost::new();
        let monitor = PerformanceMonitor::new(MonitorConfig::development(), Arc::new(TracingConsole));

        let report = monitor.initialize(&host);
        let order: Vec<_> = report.trackers.iter().map(|(m, _)| *m).collect();
        assert_eq!(
            order,
            vec![Metric::Ttfb, Metric::Fcp, Metric::Lcp, Metric::Fid, Metric::Cls]
        );
        assert!(report.unsupported().is_empty());
    }

    #[test]
    fn test_clones_share_snapshot() {
        let host = SimulatedHost::new();
        let monitor = PerformanceMonitor::new(MonitorConfig::development(), Arc::new(TracingConsole));
        let clone = monitor.clone();
        monitor.initialize(&host);

        host.deliver(
            crate::entry::EntryType::Paint,
            vec![crate::entry::PerformanceEntry::paint("first-contentful-paint", 512.0)],
        );
        assert_eq!(clone.get_metrics().fcp, Some(512.0));
        assert!(clone.is_initialized());
    }
}
