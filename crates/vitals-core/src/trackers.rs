//! The five metric trackers
//!
//! Each tracker is registered on its own and fails on its own: an entry type
//! the host rejects leaves that one metric unset and nothing else. All of them
//! write through a shared [`Recorder`], the single mutation path into the
//! snapshot.

use parking_lot::Mutex;
use std::sync::Arc;
use tracing::debug;

use crate::console::{format_metric_line, DiagnosticConsole};
use crate::entry::{EntryType, PerformanceEntry, FIRST_CONTENTFUL_PAINT};
use crate::error::ObserveError;
use crate::host::PerformanceHost;
use crate::metrics::{Metric, MetricsSnapshot};

/// Registration result of one tracker
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerStatus {
    Active,
    /// The host rejected the registration; the tracker stays off for the page lifetime
    Unsupported(ObserveError),
}

impl TrackerStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, TrackerStatus::Active)
    }
}

/// Writes metric values into the shared snapshot and reports them
#[derive(Clone)]
pub(crate) struct Recorder {
    snapshot: Arc<Mutex<MetricsSnapshot>>,
    console: Arc<dyn DiagnosticConsole>,
    debug: bool,
}

impl Recorder {
    pub(crate) fn new(
        snapshot: Arc<Mutex<MetricsSnapshot>>,
        console: Arc<dyn DiagnosticConsole>,
        debug: bool,
    ) -> Self {
        Self {
            snapshot,
            console,
            debug,
        }
    }

    fn store(&self, metric: Metric, value: f64) {
        self.snapshot.lock().set(metric, value);
        debug!(metric = metric.short_name(), value, "recorded metric");
    }

    fn report(&self, metric: Metric, value: f64) {
        if self.debug {
            self.console.info(&format_metric_line(metric, value));
        }
    }

    fn record(&self, metric: Metric, value: f64) {
        self.store(metric, value);
        self.report(metric, value);
    }
}

/// Tracker identities, in registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tracker {
    Ttfb,
    Fcp,
    Lcp,
    Fid,
    Cls,
}

impl Tracker {
    pub(crate) const ALL: [Tracker; 5] = [
        Tracker::Ttfb,
        Tracker::Fcp,
        Tracker::Lcp,
        Tracker::Fid,
        Tracker::Cls,
    ];

    pub(crate) fn metric(&self) -> Metric {
        match self {
            Tracker::Ttfb => Metric::Ttfb,
            Tracker::Fcp => Metric::Fcp,
            Tracker::Lcp => Metric::Lcp,
            Tracker::Fid => Metric::Fid,
            Tracker::Cls => Metric::Cls,
        }
    }

    pub(crate) fn register<H>(&self, host: &H, recorder: Recorder) -> TrackerStatus
    where
        H: PerformanceHost + ?Sized,
    {
        let result = match self {
            Tracker::Ttfb => track_ttfb(host, recorder),
            Tracker::Fcp => track_fcp(host, recorder),
            Tracker::Lcp => track_lcp(host, recorder),
            Tracker::Fid => track_fid(host, recorder),
            Tracker::Cls => track_cls(host, recorder),
        };
        match result {
            Ok(()) => TrackerStatus::Active,
            Err(e) => TrackerStatus::Unsupported(e),
        }
    }
}

/// LCP value of a batch: the last candidate wins, render time before load time
///
/// A render time of zero counts as withheld.
pub fn lcp_from_batch(entries: &[PerformanceEntry]) -> Option<f64> {
    match entries.last() {
        Some(PerformanceEntry::LargestContentfulPaint {
            render_time,
            load_time,
        }) => Some(render_time.filter(|t| *t > 0.0).unwrap_or(*load_time)),
        _ => None,
    }
}

fn track_lcp<H>(host: &H, recorder: Recorder) -> Result<(), ObserveError>
where
    H: PerformanceHost + ?Sized,
{
    host.observe(
        EntryType::LargestContentfulPaint,
        true,
        Box::new(move |entries: &[PerformanceEntry]| {
            if let Some(lcp) = lcp_from_batch(entries) {
                recorder.record(Metric::Lcp, lcp);
            }
        }),
    )
}

fn track_fid<H>(host: &H, recorder: Recorder) -> Result<(), ObserveError>
where
    H: PerformanceHost + ?Sized,
{
    host.observe(
        EntryType::FirstInput,
        true,
        Box::new(move |entries: &[PerformanceEntry]| {
            for entry in entries {
                if let PerformanceEntry::FirstInput {
                    start_time,
                    processing_start,
                } = entry
                {
                    recorder.record(Metric::Fid, processing_start - start_time);
                }
            }
        }),
    )
}

fn track_cls<H>(host: &H, recorder: Recorder) -> Result<(), ObserveError>
where
    H: PerformanceHost + ?Sized,
{
    let mut total: Option<f64> = None;
    host.observe(
        EntryType::LayoutShift,
        true,
        Box::new(move |entries: &[PerformanceEntry]| {
            for entry in entries {
                // Shifts right after user input are expected and excluded
                if let PerformanceEntry::LayoutShift {
                    value,
                    had_recent_input: false,
                } = entry
                {
                    let sum = total.unwrap_or(0.0) + value;
                    total = Some(sum);
                    recorder.store(Metric::Cls, sum);
                }
            }
            if let Some(sum) = total {
                recorder.report(Metric::Cls, sum);
            }
        }),
    )
}

fn track_ttfb<H>(host: &H, recorder: Recorder) -> Result<(), ObserveError>
where
    H: PerformanceHost + ?Sized,
{
    if let Some(navigation) = host.navigation_timing()? {
        recorder.record(Metric::Ttfb, navigation.time_to_first_byte());
    }
    Ok(())
}

fn track_fcp<H>(host: &H, recorder: Recorder) -> Result<(), ObserveError>
where
    H: PerformanceHost + ?Sized,
{
    host.observe(
        EntryType::Paint,
        true,
        Box::new(move |entries: &[PerformanceEntry]| {
            for entry in entries {
                if let PerformanceEntry::Paint { name, start_time } = entry {
                    if name == FIRST_CONTENTFUL_PAINT {
                        recorder.record(Metric::Fcp, *start_time);
                    }
                }
            }
        }),
    )
}
