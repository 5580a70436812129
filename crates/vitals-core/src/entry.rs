//! Host-neutral model of the performance entries the trackers consume.
//!
//! Hosts translate their native entries (DOM `PerformanceEntry` objects in the
//! browser) into [`PerformanceEntry`] values and deliver them in batches.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entry-type selector passed to [`crate::host::PerformanceHost::observe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryType {
    LargestContentfulPaint,
    FirstInput,
    LayoutShift,
    Paint,
    Navigation,
}

impl EntryType {
    /// The selector string used by the Performance Timeline API
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::LargestContentfulPaint => "largest-contentful-paint",
            EntryType::FirstInput => "first-input",
            EntryType::LayoutShift => "layout-shift",
            EntryType::Paint => "paint",
            EntryType::Navigation => "navigation",
        }
    }

    /// Parse a selector string, returning `None` for entry types no tracker uses
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "largest-contentful-paint" => Some(EntryType::LargestContentfulPaint),
            "first-input" => Some(EntryType::FirstInput),
            "layout-shift" => Some(EntryType::LayoutShift),
            "paint" => Some(EntryType::Paint),
            "navigation" => Some(EntryType::Navigation),
            _ => None,
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of the paint entry FCP is read from
pub const FIRST_CONTENTFUL_PAINT: &str = "first-contentful-paint";

/// A single performance entry, carrying only the fields the trackers read.
///
/// All times are milliseconds on the host's monotonic high-resolution clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entryType", rename_all = "kebab-case")]
pub enum PerformanceEntry {
    LargestContentfulPaint {
        /// `None` or zero when the host withholds render time (e.g. cross-origin images)
        render_time: Option<f64>,
        load_time: f64,
    },
    FirstInput {
        start_time: f64,
        processing_start: f64,
    },
    LayoutShift {
        value: f64,
        had_recent_input: bool,
    },
    Paint {
        name: String,
        start_time: f64,
    },
}

impl PerformanceEntry {
    pub fn lcp(render_time: Option<f64>, load_time: f64) -> Self {
        PerformanceEntry::LargestContentfulPaint {
            render_time,
            load_time,
        }
    }

    pub fn first_input(start_time: f64, processing_start: f64) -> Self {
        PerformanceEntry::FirstInput {
            start_time,
            processing_start,
        }
    }

    pub fn layout_shift(value: f64, had_recent_input: bool) -> Self {
        PerformanceEntry::LayoutShift {
            value,
            had_recent_input,
        }
    }

    pub fn paint(name: impl Into<String>, start_time: f64) -> Self {
        PerformanceEntry::Paint {
            name: name.into(),
            start_time,
        }
    }

    /// The stream this entry belongs to
    pub fn entry_type(&self) -> EntryType {
        match self {
            PerformanceEntry::LargestContentfulPaint { .. } => EntryType::LargestContentfulPaint,
            PerformanceEntry::FirstInput { .. } => EntryType::FirstInput,
            PerformanceEntry::LayoutShift { .. } => EntryType::LayoutShift,
            PerformanceEntry::Paint { .. } => EntryType::Paint,
        }
    }
}

/// The fields of the navigation timing record TTFB is derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavigationTiming {
    pub request_start: f64,
    pub response_start: f64,
}

impl NavigationTiming {
    pub fn time_to_first_byte(&self) -> f64 {
        self.response_start - self.request_start
    }
}
