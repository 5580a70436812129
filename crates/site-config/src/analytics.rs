//! Analytics toggles
//!
//! Both providers are off by default. Each one only loads when enabled, and
//! outside production only when its `enable_in_dev` flag is also set.

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::error::ConfigError;

/// Placeholder id shipped in the default configuration
pub const PLACEHOLDER_MEASUREMENT_ID: &str = "G-XXXXXXXXXX";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub google_analytics: GoogleAnalytics,
    pub cloudflare_analytics: CloudflareAnalytics,
}

/// Google Analytics 4
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleAnalytics {
    pub enabled: bool,
    /// GA4 measurement id, `G-` followed by the property code
    pub measurement_id: String,
    pub enable_in_dev: bool,
}

impl Default for GoogleAnalytics {
    fn default() -> Self {
        Self {
            enabled: false,
            measurement_id: PLACEHOLDER_MEASUREMENT_ID.to_string(),
            enable_in_dev: false,
        }
    }
}

/// Cloudflare Web Analytics (cookieless)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CloudflareAnalytics {
    pub enabled: bool,
    /// Only needed for a custom beacon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub enable_in_dev: bool,
}

fn gate(enabled: bool, enable_in_dev: bool, env: Environment) -> bool {
    enabled && (env.is_production() || enable_in_dev)
}

impl AnalyticsConfig {
    pub fn should_enable_ga(&self, env: Environment) -> bool {
        let ga = &self.google_analytics;
        gate(ga.enabled, ga.enable_in_dev, env)
    }

    pub fn should_enable_cf(&self, env: Environment) -> bool {
        let cf = &self.cloudflare_analytics;
        gate(cf.enabled, cf.enable_in_dev, env)
    }

    /// Reject an enabled GA block that still carries the placeholder or a malformed id
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ga = &self.google_analytics;
        if !ga.enabled {
            return Ok(());
        }
        let id = ga.measurement_id.as_str();
        let well_formed = id
            .strip_prefix("G-")
            .map(|code| !code.is_empty() && code.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or(false);
        if id == PLACEHOLDER_MEASUREMENT_ID || !well_formed {
            return Err(ConfigError::InvalidMeasurementId(id.to_string()));
        }
        Ok(())
    }
}
