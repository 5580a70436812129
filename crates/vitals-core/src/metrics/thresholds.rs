use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bounds (inclusive) of the good and needs-improvement bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub good: f64,
    pub needs_improvement: f64,
}

impl Thresholds {
    pub const fn new(good: f64, needs_improvement: f64) -> Self {
        Self {
            good,
            needs_improvement,
        }
    }

    /// Classify a value; both bounds are inclusive
    pub fn rate(&self, value: f64) -> Rating {
        if value <= self.good {
            Rating::Good
        } else if value <= self.needs_improvement {
            Rating::NeedsImprovement
        } else {
            Rating::Poor
        }
    }
}

/// Classification of a metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Rating {
    Good,
    NeedsImprovement,
    Poor,
}

impl Rating {
    /// Console label with status glyph
    pub fn label(&self) -> &'static str {
        match self {
            Rating::Good => "✅ Good",
            Rating::NeedsImprovement => "⚠️ Needs Improvement",
            Rating::Poor => "❌ Poor",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The five tracked Core Web Vitals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Lcp,
    Fid,
    Cls,
    Ttfb,
    Fcp,
}

impl Metric {
    /// All metrics in snapshot field order
    pub const ALL: [Metric; 5] = [
        Metric::Lcp,
        Metric::Fid,
        Metric::Cls,
        Metric::Ttfb,
        Metric::Fcp,
    ];

    /// Short uppercase name, e.g. "LCP"
    pub fn short_name(&self) -> &'static str {
        match self {
            Metric::Lcp => "LCP",
            Metric::Fid => "FID",
            Metric::Cls => "CLS",
            Metric::Ttfb => "TTFB",
            Metric::Fcp => "FCP",
        }
    }

    /// Long label used in console output
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Lcp => "LCP (Largest Contentful Paint)",
            Metric::Fid => "FID (First Input Delay)",
            Metric::Cls => "CLS (Cumulative Layout Shift)",
            Metric::Ttfb => "TTFB (Time to First Byte)",
            Metric::Fcp => "FCP (First Contentful Paint)",
        }
    }

    /// Unit suffix; CLS is a unitless score
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Cls => "",
            _ => "ms",
        }
    }

    pub fn thresholds(&self) -> Thresholds {
        match self {
            Metric::Lcp => Thresholds::new(2500.0, 4000.0),
            Metric::Fid => Thresholds::new(100.0, 300.0),
            Metric::Cls => Thresholds::new(0.1, 0.25),
            Metric::Ttfb => Thresholds::new(800.0, 1800.0),
            Metric::Fcp => Thresholds::new(1800.0, 3000.0),
        }
    }

    pub fn rate(&self, value: f64) -> Rating {
        self.thresholds().rate(value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
