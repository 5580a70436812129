//! Core Web Vitals values and their classification
//!
//! - [`MetricsSnapshot`]: the five optional metric values of a page
//! - [`Metric`], [`Thresholds`], [`Rating`]: fixed good / needs-improvement / poor bands

pub mod snapshot;
pub mod thresholds;

pub use snapshot::MetricsSnapshot;
pub use thresholds::{Metric, Rating, Thresholds};
