//! Social-media links for the footer
//!
//! A platform only shows up once its `enabled` flag is set. Email is the one
//! channel enabled out of the box. A config file only names the fields it
//! changes, e.g. `[social.twitter]` with `enabled = true`; everything else
//! keeps the built-in value.

use serde::{Deserialize, Deserializer, Serialize};

/// Name of the email channel, which is not a social profile
pub const EMAIL_PLATFORM: &str = "Email";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPlatform {
    pub name: String,
    /// Full URL of the profile or page
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle: Option<String>,
    #[serde(default)]
    pub enabled: bool,
    /// Icon identifier used by the footer
    pub icon: String,
    /// Screen-reader label
    pub aria_label: String,
}

impl SocialPlatform {
    fn new(name: &str, url: &str, handle: Option<&str>, icon: &str, aria_label: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            handle: handle.map(str::to_string),
            enabled: false,
            icon: icon.to_string(),
            aria_label: aria_label.to_string(),
        }
    }

    pub fn is_email(&self) -> bool {
        self.name == EMAIL_PLATFORM
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialMediaConfig {
    pub twitter: SocialPlatform,
    pub facebook: SocialPlatform,
    pub instagram: SocialPlatform,
    pub linkedin: SocialPlatform,
    pub youtube: SocialPlatform,
    pub tiktok: SocialPlatform,
    pub github: SocialPlatform,
    pub email: SocialPlatform,
}

impl Default for SocialMediaConfig {
    fn default() -> Self {
        let mut email = SocialPlatform::new(
            EMAIL_PLATFORM,
            "mailto:info@encrypther.org",
            None,
            "Mail",
            "Email us at info@encrypther.org",
        );
        email.enabled = true;

        Self {
            twitter: SocialPlatform::new(
                "Twitter",
                "https://twitter.com/encrypther",
                Some("@encrypther"),
                "Twitter",
                "Follow us on Twitter",
            ),
            facebook: SocialPlatform::new(
                "Facebook",
                "https://facebook.com/encrypther",
                None,
                "Facebook",
                "Follow us on Facebook",
            ),
            instagram: SocialPlatform::new(
                "Instagram",
                "https://instagram.com/encrypther",
                Some("@encrypther"),
                "Instagram",
                "Follow us on Instagram",
            ),
            linkedin: SocialPlatform::new(
                "LinkedIn",
                "https://linkedin.com/company/encrypther",
                None,
                "Linkedin",
                "Connect with us on LinkedIn",
            ),
            youtube: SocialPlatform::new(
                "YouTube",
                "https://youtube.com/@encrypther",
                Some("@encrypther"),
                "Youtube",
                "Subscribe to our YouTube channel",
            ),
            // No TikTok glyph in the icon set yet
            tiktok: SocialPlatform::new(
                "TikTok",
                "https://tiktok.com/@encrypther",
                Some("@encrypther"),
                "Music",
                "Follow us on TikTok",
            ),
            github: SocialPlatform::new(
                "GitHub",
                "https://github.com/encrypther",
                None,
                "Github",
                "View our open-source resources on GitHub",
            ),
            email,
        }
    }
}

/// Fields of one platform as written in a config file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PlatformPatch {
    name: Option<String>,
    url: Option<String>,
    handle: Option<String>,
    enabled: Option<bool>,
    icon: Option<String>,
    aria_label: Option<String>,
}

impl PlatformPatch {
    fn apply(self, platform: &mut SocialPlatform) {
        if let Some(name) = self.name {
            platform.name = name;
        }
        if let Some(url) = self.url {
            platform.url = url;
        }
        if let Some(handle) = self.handle {
            platform.handle = Some(handle);
        }
        if let Some(enabled) = self.enabled {
            platform.enabled = enabled;
        }
        if let Some(icon) = self.icon {
            platform.icon = icon;
        }
        if let Some(aria_label) = self.aria_label {
            platform.aria_label = aria_label;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SocialMediaPatch {
    twitter: PlatformPatch,
    facebook: PlatformPatch,
    instagram: PlatformPatch,
    linkedin: PlatformPatch,
    youtube: PlatformPatch,
    tiktok: PlatformPatch,
    github: PlatformPatch,
    email: PlatformPatch,
}

impl<'de> Deserialize<'de> for SocialMediaConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let patch = SocialMediaPatch::deserialize(deserializer)?;
        let mut config = Self::default();
        patch.twitter.apply(&mut config.twitter);
        patch.facebook.apply(&mut config.facebook);
        patch.instagram.apply(&mut config.instagram);
        patch.linkedin.apply(&mut config.linkedin);
        patch.youtube.apply(&mut config.youtube);
        patch.tiktok.apply(&mut config.tiktok);
        patch.github.apply(&mut config.github);
        patch.email.apply(&mut config.email);
        Ok(config)
    }
}

impl SocialMediaConfig {
    /// Every platform in footer order
    pub fn platforms(&self) -> [&SocialPlatform; 8] {
        [
            &self.twitter,
            &self.facebook,
            &self.instagram,
            &self.linkedin,
            &self.youtube,
            &self.tiktok,
            &self.github,
            &self.email,
        ]
    }

    pub fn enabled_platforms(&self) -> Vec<&SocialPlatform> {
        self.platforms()
            .into_iter()
            .filter(|p| p.enabled)
            .collect()
    }

    /// Enabled profile URLs for structured data; the email channel is left out
    pub fn social_media_urls(&self) -> Vec<String> {
        self.platforms()
            .into_iter()
            .filter(|p| p.enabled && !p.is_email())
            .map(|p| p.url.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_email_enabled_by_default() {
        let config = SocialMediaConfig::default();
        let enabled = config.enabled_platforms();

        assert_eq!(enabled.len(), 1);
        assert_eq!(enabled[0].name, "Email");
        assert_eq!(enabled[0].url, "mailto:info@encrypther.org");
        assert!(config.social_media_urls().is_empty());
    }

    #[test]
    fn test_enabled_platforms_keep_footer_order() {
        let mut config = SocialMediaConfig::default();
        config.youtube.enabled = true;
        config.twitter.enabled = true;

        let names: Vec<_> = config
            .enabled_platforms()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Twitter", "YouTube", "Email"]);
        assert_eq!(
            config.social_media_urls(),
            vec![
                "https://twitter.com/encrypther".to_string(),
                "https://youtube.com/@encrypther".to_string()
            ]
        );
    }

    #[test]
    fn test_disabling_email_removes_it() {
        let mut config = SocialMediaConfig::default();
        config.email.enabled = false;
        assert!(config.enabled_platforms().is_empty());
    }

    #[test]
    fn test_partial_platform_keeps_built_in_fields() {
        let config: SocialMediaConfig =
            serde_json::from_str(r#"{"github": {"enabled": true}, "email": {"url": "mailto:hello@encrypther.org"}}"#)
                .unwrap();

        assert!(config.github.enabled);
        assert_eq!(config.github.name, "GitHub");
        assert_eq!(config.github.aria_label, "View our open-source resources on GitHub");
        assert!(config.email.enabled);
        assert_eq!(config.email.url, "mailto:hello@encrypther.org");
        assert_eq!(config.twitter, SocialMediaConfig::default().twitter);
    }

    #[test]
    fn test_unknown_platform_field_rejected() {
        let result: Result<SocialMediaConfig, _> =
            serde_json::from_str(r#"{"twitter": {"enable": true}}"#);
        assert!(result.is_err());
    }
}
