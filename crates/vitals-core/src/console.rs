//! Diagnostic console output
//!
//! Everything the monitor prints goes through [`DiagnosticConsole`]. The wasm
//! bindings forward to the browser's `console.*`; native hosts can use
//! [`TracingConsole`], which emits `tracing` events instead.

use serde::Serialize;
use std::fmt::Write;
use tracing::{info, warn};

use crate::metrics::{Metric, MetricsSnapshot, Rating};

/// Prefix on every console line the monitor writes
pub const LOG_PREFIX: &str = "[Performance]";

/// Destination for the monitor's development-mode output
pub trait DiagnosticConsole: Send + Sync {
    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    /// Print the summary table under a group label
    fn summary(&self, label: &str, table: &SummaryTable);
}

/// Console backed by `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl DiagnosticConsole for TracingConsole {
    fn info(&self, message: &str) {
        info!(target: "vitals", "{}", message);
    }

    fn warn(&self, message: &str) {
        warn!(target: "vitals", "{}", message);
    }

    fn summary(&self, label: &str, table: &SummaryTable) {
        info!(target: "vitals", "{}\n{}", label, table.render());
    }
}

/// Format the one-line report for a freshly recorded metric
pub fn format_metric_line(metric: Metric, value: f64) -> String {
    format!(
        "{} {}: {:.2}{} - {}",
        LOG_PREFIX,
        metric.label(),
        value,
        metric.unit(),
        metric.rate(value)
    )
}

/// One row of the summary table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub metric: Metric,
    pub value: Option<f64>,
    pub rating: Option<Rating>,
}

impl SummaryRow {
    fn display_value(&self) -> String {
        match self.value {
            Some(v) if self.metric == Metric::Cls => format!("{:.4}", v),
            Some(v) => format!("{:.0}ms", v),
            None => "—".to_string(),
        }
    }

    fn display_rating(&self) -> &'static str {
        self.rating.map(|r| r.label()).unwrap_or("—")
    }
}

/// Snapshot laid out as a table, one row per metric in field order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    pub fn from_snapshot(snapshot: &MetricsSnapshot) -> Self {
        let rows = Metric::ALL
            .into_iter()
            .map(|metric| SummaryRow {
                metric,
                value: snapshot.get(metric),
                rating: snapshot.rating(metric),
            })
            .collect();
        Self { rows }
    }

    /// Render as an ASCII box table for text consoles
    pub fn render(&self) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail
        let _ = self.write_table(&mut output);
        output
    }

    fn write_table(&self, output: &mut String) -> std::fmt::Result {
        writeln!(output, "┌────────┬────────────┬───────────────────────┐")?;
        writeln!(output, "│ Metric │   Value    │ Rating                │")?;
        writeln!(output, "├────────┼────────────┼───────────────────────┤")?;
        for row in &self.rows {
            writeln!(
                output,
                "│ {:<6} │ {:>10} │ {:<21} │",
                row.metric.short_name(),
                row.display_value(),
                row.display_rating()
            )?;
        }
        write!(output, "└────────┴────────────┴───────────────────────┘")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_line() {
        assert_eq!(
            format_metric_line(Metric::Lcp, 1200.0),
            "[Performance] LCP (Largest Contentful Paint): 1200.00ms - ✅ Good"
        );
        assert_eq!(
            format_metric_line(Metric::Cls, 0.13),
            "[Performance] CLS (Cumulative Layout Shift): 0.13 - ⚠️ Needs Improvement"
        );
    }

    #[test]
    fn test_table_rows_follow_snapshot() {
        let snapshot = MetricsSnapshot {
            lcp: Some(4200.0),
            cls: Some(0.02),
            ..Default::default()
        };
        let table = SummaryTable::from_snapshot(&snapshot);

        assert_eq!(table.rows.len(), 5);
        assert_eq!(table.rows[0].rating, Some(Rating::Poor));
        assert_eq!(table.rows[1].value, None);
        assert_eq!(table.rows[2].rating, Some(Rating::Good));
    }

    #[test]
    fn test_render_contains_all_metrics() {
        let snapshot = MetricsSnapshot {
            ttfb: Some(350.0),
            ..Default::default()
        };
        let rendered = SummaryTable::from_snapshot(&snapshot).render();

        for name in ["LCP", "FID", "CLS", "TTFB", "FCP"] {
            assert!(rendered.contains(name), "missing {name}");
        }
        assert!(rendered.contains("350ms"));
        assert!(rendered.contains("—"));
    }
}
