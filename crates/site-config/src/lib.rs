//! Site configuration for EncryptHer
//!
//! Declarative settings shared by the site's pages and scripts:
//!
//! - [`analytics`]: Google Analytics 4 and Cloudflare Web Analytics toggles
//! - [`seo`]: site metadata, per-page overrides and schema.org structured data
//! - [`social`]: social-media links shown in the footer
//! - [`content`]: frontmatter schema of the content collections
//!
//! Every section has the site's defaults built in and can be overridden from
//! a TOML file:
//!
//! ```
//! use site_config::{Environment, SiteConfig};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = SiteConfig::from_str(r#"
//!     [analytics.google_analytics]
//!     enabled = true
//!     measurement_id = "G-ABC1234567"
//! "#)?;
//!
//! assert!(config.analytics.should_enable_ga(Environment::Production));
//! assert!(!config.analytics.should_enable_ga(Environment::Development));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod analytics;
pub mod content;
pub mod environment;
pub mod error;
pub mod seo;
pub mod site;
pub mod social;

pub use analytics::AnalyticsConfig;
pub use content::{Collection, ContentEntry, ContentFrontmatter};
pub use environment::Environment;
pub use error::{ConfigError, ContentError};
pub use seo::{Page, PageMeta, SeoConfig};
pub use site::SiteConfig;
pub use social::{SocialMediaConfig, SocialPlatform};
