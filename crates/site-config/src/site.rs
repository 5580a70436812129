//! Whole-site configuration loaded from TOML
//!
//! Sections missing from the file keep their built-in defaults, so an empty
//! file yields the stock EncryptHer configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::analytics::AnalyticsConfig;
use crate::error::ConfigError;
use crate::seo::SeoConfig;
use crate::social::SocialMediaConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub analytics: AnalyticsConfig,
    pub seo: SeoConfig,
    pub social: SocialMediaConfig,
}

impl SiteConfig {
    /// Load and validate configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - A value fails validation
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse and validate configuration from a TOML string
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate().context("Invalid site configuration")?;
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize site configuration")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analytics.validate()?;
        self.seo.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;
    use crate::seo::Page;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_overrides() {
        let toml = r#"
            [analytics.cloudflare_analytics]
            enabled = true

            [seo]
            site_url = "https://encrypther.org"
            twitter_handle = "@EncryptHer"

            [seo.pages.about]
            title = "About Us"
            description = "Who we are"

            [social.instagram]
            url = "https://instagram.com/encrypther_official"
            enabled = true
        "#;
        let config = SiteConfig::from_str(toml).unwrap();

        assert!(config.analytics.should_enable_cf(Environment::Production));
        assert!(!config.analytics.should_enable_ga(Environment::Production));
        assert_eq!(config.seo.twitter_handle.as_deref(), Some("@EncryptHer"));
        assert_eq!(config.seo.site_name, "EncryptHer");

        let about = config.seo.page_meta(Page::About);
        assert_eq!(about.title, "About Us");
        assert_eq!(about.canonical_url, "https://encrypther.org/about");
        // Keywords were left out of the override, so the page keeps its own
        assert_eq!(
            about.keywords,
            SeoConfig::default().pages.about.keywords
        );
        // Untouched pages keep their built-in text
        assert_eq!(
            config.seo.page_meta(Page::Contact).title,
            "Contact Us - EncryptHer"
        );

        assert_eq!(
            config.social.social_media_urls(),
            vec!["https://instagram.com/encrypther_official".to_string()]
        );
    }

    #[test]
    fn test_enable_platform_with_single_flag() {
        let config = SiteConfig::from_str("[social.twitter]\nenabled = true\n").unwrap();

        assert_eq!(
            config.social.social_media_urls(),
            vec!["https://twitter.com/encrypther".to_string()]
        );
        let twitter = &config.social.twitter;
        assert_eq!(twitter.handle.as_deref(), Some("@encrypther"));
        assert_eq!(twitter.aria_label, "Follow us on Twitter");
        // Email stays enabled alongside
        assert_eq!(config.social.enabled_platforms().len(), 2);
    }

    #[test]
    fn test_placeholder_measurement_id_rejected() {
        let toml = r#"
            [analytics.google_analytics]
            enabled = true
        "#;
        let err = SiteConfig::from_str(toml).unwrap_err();
        assert!(format!("{:#}", err).contains("G-XXXXXXXXXX"));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(SiteConfig::from_str("[seo\nsite_name =").is_err());
    }

    #[test]
    fn test_toml_round_trip_of_defaults() {
        let config = SiteConfig::default();
        let text = config.to_toml().unwrap();
        assert_eq!(SiteConfig::from_str(&text).unwrap(), config);
    }
}
