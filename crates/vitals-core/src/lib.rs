//! Core Web Vitals collection for the EncryptHer site
//!
//! This crate observes the browser's performance entry streams, derives five
//! Core Web Vitals values from them and classifies each against fixed
//! thresholds. It has no browser dependency of its own: the host environment
//! is reached through the [`host::PerformanceHost`] and [`host::PageLifecycle`]
//! traits, and all diagnostic output goes through [`console::DiagnosticConsole`].
//!
//! # Metrics
//!
//! - **LCP** (Largest Contentful Paint): last candidate of the latest batch
//! - **FID** (First Input Delay): `processingStart - startTime`, last write wins
//! - **CLS** (Cumulative Layout Shift): sum of shifts without recent input
//! - **TTFB** (Time To First Byte): `responseStart - requestStart` of the navigation
//! - **FCP** (First Contentful Paint): start time of the `first-contentful-paint` paint
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use vitals_core::console::TracingConsole;
//! use vitals_core::entry::{EntryType, PerformanceEntry};
//! use vitals_core::host::simulated::SimulatedHost;
//! use vitals_core::{MonitorConfig, PerformanceMonitor, Rating, Metric};
//!
//! let host = SimulatedHost::new();
//! let monitor = PerformanceMonitor::new(MonitorConfig::development(), Arc::new(TracingConsole));
//! monitor.initialize(&host);
//!
//! host.deliver(
//!     EntryType::LargestContentfulPaint,
//!     vec![PerformanceEntry::lcp(Some(1200.0), 1100.0)],
//! );
//!
//! let metrics = monitor.get_metrics();
//! assert_eq!(metrics.lcp, Some(1200.0));
//! assert_eq!(Metric::Lcp.rate(1200.0), Rating::Good);
//! ```

pub mod config;
pub mod console;
pub mod entry;
pub mod error;
pub mod host;
pub mod metrics;
pub mod monitor;
pub mod trackers;

// Re-export main types for convenience
pub use config::MonitorConfig;
pub use console::{DiagnosticConsole, SummaryTable, TracingConsole};
pub use entry::{EntryType, NavigationTiming, PerformanceEntry};
pub use error::ObserveError;
pub use metrics::{Metric, MetricsSnapshot, Rating, Thresholds};
pub use monitor::{AutoStart, InitOutcome, InitReport, PerformanceMonitor};
pub use trackers::TrackerStatus;
