use serde::{Deserialize, Serialize};

use super::thresholds::{Metric, Rating};

/// The latest value of each Core Web Vital for the current page
///
/// Every field stays `None` until its tracker has recorded at least once.
/// The monitor only ever hands out owned copies of this record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Largest Contentful Paint in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lcp: Option<f64>,
    /// First Input Delay in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fid: Option<f64>,
    /// Cumulative Layout Shift (unitless)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cls: Option<f64>,
    /// Time To First Byte in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttfb: Option<f64>,
    /// First Contentful Paint in milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcp: Option<f64>,
}

impl MetricsSnapshot {
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Lcp => self.lcp,
            Metric::Fid => self.fid,
            Metric::Cls => self.cls,
            Metric::Ttfb => self.ttfb,
            Metric::Fcp => self.fcp,
        }
    }

    pub(crate) fn set(&mut self, metric: Metric, value: f64) {
        let slot = match metric {
            Metric::Lcp => &mut self.lcp,
            Metric::Fid => &mut self.fid,
            Metric::Cls => &mut self.cls,
            Metric::Ttfb => &mut self.ttfb,
            Metric::Fcp => &mut self.fcp,
        };
        *slot = Some(value);
    }

    /// Rating of a metric, if it has been recorded
    pub fn rating(&self, metric: Metric) -> Option<Rating> {
        self.get(metric).map(|v| metric.rate(v))
    }

    /// Recorded metrics in field order
    pub fn recorded(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL
            .into_iter()
            .filter_map(move |m| self.get(m).map(|v| (m, v)))
    }

    pub fn is_empty(&self) -> bool {
        self.recorded().next().is_none()
    }
}
