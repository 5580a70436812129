//! Monitor configuration
//!
//! The debug flag distinguishes development from production builds. When it is
//! off the monitor registers nothing and writes nothing.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime settings for [`crate::PerformanceMonitor`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonitorConfig {
    /// Enables tracker registration and all console output
    #[serde(default)]
    pub debug: bool,
    /// Delay between the page `load` event and the summary log (default: 1000ms)
    #[serde(default = "default_summary_delay_ms")]
    pub summary_delay_ms: u64,
}

fn default_summary_delay_ms() -> u64 {
    1000
}

impl MonitorConfig {
    /// Debug enabled, default summary delay
    pub fn development() -> Self {
        Self {
            debug: true,
            ..Self::default()
        }
    }

    /// Debug disabled: the monitor is inert
    pub fn production() -> Self {
        Self::default()
    }

    /// Follows the build profile, debug builds count as development
    pub fn for_build() -> Self {
        if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }

    pub fn with_summary_delay(mut self, delay: Duration) -> Self {
        self.summary_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn summary_delay(&self) -> Duration {
        Duration::from_millis(self.summary_delay_ms)
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            debug: false,
            summary_delay_ms: default_summary_delay_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MonitorConfig::default();
        assert!(!config.debug);
        assert_eq!(config.summary_delay(), Duration::from_millis(1000));
        assert!(MonitorConfig::development().debug);
        assert!(!MonitorConfig::production().debug);
    }

    #[test]
    fn test_custom_delay() {
        let config = MonitorConfig::development().with_summary_delay(Duration::from_millis(250));
        assert_eq!(config.summary_delay_ms, 250);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: MonitorConfig = serde_json::from_str(r#"{"debug":true}"#).unwrap();
        assert_eq!(config, MonitorConfig::development());
    }
}
