//! SEO metadata
//!
//! Site-wide defaults for titles, descriptions, Open Graph images and the
//! organization record, plus per-page overrides for the eight top-level pages.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};

use crate::error::ConfigError;
use crate::social::SocialMediaConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeoConfig {
    pub site_name: String,
    /// Production URL; update when moving to a custom domain
    pub site_url: String,
    pub default_title: String,
    pub default_description: String,
    /// Social share image, relative to the public folder (1200x630 works best)
    pub default_image: String,
    pub author: String,
    pub keywords: Vec<String>,
    /// Language and region code, e.g. `en_US`
    pub locale: String,
    /// Browser chrome color on mobile devices
    pub theme_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,
    pub organization: Organization,
    pub pages: PageOverrides,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    pub name: String,
    pub legal_name: String,
    pub founding_date: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street_address: String,
    pub address_locality: String,
    pub address_region: String,
    pub postal_code: String,
    /// ISO country code, e.g. `US`
    pub address_country: String,
}

/// Title, description and keywords for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSeo {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl PageSeo {
    fn new(title: &str, description: &str, keywords: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// The site's top-level pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Home,
    About,
    OnlinePrivacy,
    PublicSafety,
    TravelSafety,
    DigitalAdvocacy,
    Contact,
    Donate,
}

impl Page {
    pub const ALL: [Page; 8] = [
        Page::Home,
        Page::About,
        Page::OnlinePrivacy,
        Page::PublicSafety,
        Page::TravelSafety,
        Page::DigitalAdvocacy,
        Page::Contact,
        Page::Donate,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::OnlinePrivacy => "online-privacy",
            Page::PublicSafety => "public-safety",
            Page::TravelSafety => "travel-safety",
            Page::DigitalAdvocacy => "digital-advocacy",
            Page::Contact => "contact",
            Page::Donate => "donate",
        }
    }

    /// Site-relative path of the page
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            other => format!("/{}", other.slug()),
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.slug() == slug)
    }
}

/// Per-page overrides; pages and fields left out of a config file keep the built-in text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOverrides {
    pub home: PageSeo,
    pub about: PageSeo,
    pub online_privacy: PageSeo,
    pub public_safety: PageSeo,
    pub travel_safety: PageSeo,
    pub digital_advocacy: PageSeo,
    pub contact: PageSeo,
    pub donate: PageSeo,
}

impl PageOverrides {
    pub fn get(&self, page: Page) -> &PageSeo {
        match page {
            Page::Home => &self.home,
            Page::About => &self.about,
            Page::OnlinePrivacy => &self.online_privacy,
            Page::PublicSafety => &self.public_safety,
            Page::TravelSafety => &self.travel_safety,
            Page::DigitalAdvocacy => &self.digital_advocacy,
            Page::Contact => &self.contact,
            Page::Donate => &self.donate,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PageSeoPatch {
    title: Option<String>,
    description: Option<String>,
    keywords: Option<Vec<String>>,
}

impl PageSeoPatch {
    fn apply(self, page: &mut PageSeo) {
        if let Some(title) = self.title {
            page.title = title;
        }
        if let Some(description) = self.description {
            page.description = description;
        }
        if let Some(keywords) = self.keywords {
            page.keywords = keywords;
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageOverridesPatch {
    home: PageSeoPatch,
    about: PageSeoPatch,
    online_privacy: PageSeoPatch,
    public_safety: PageSeoPatch,
    travel_safety: PageSeoPatch,
    digital_advocacy: PageSeoPatch,
    contact: PageSeoPatch,
    donate: PageSeoPatch,
}

impl<'de> Deserialize<'de> for PageOverrides {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let patch = PageOverridesPatch::deserialize(deserializer)?;
        let mut pages = Self::default();
        patch.home.apply(&mut pages.home);
        patch.about.apply(&mut pages.about);
        patch.online_privacy.apply(&mut pages.online_privacy);
        patch.public_safety.apply(&mut pages.public_safety);
        patch.travel_safety.apply(&mut pages.travel_safety);
        patch.digital_advocacy.apply(&mut pages.digital_advocacy);
        patch.contact.apply(&mut pages.contact);
        patch.donate.apply(&mut pages.donate);
        Ok(pages)
    }
}

impl Default for PageOverrides {
    fn default() -> Self {
        Self {
            home: PageSeo::new(
                "EncryptHer - Your Safety, Your Privacy, Your Power",
                "EncryptHer empowers women through comprehensive education on online privacy, personal safety, travel security, and digital advocacy. Join thousands learning to protect themselves in the digital age.",
                &["women digital safety", "online privacy education", "cybersecurity training", "personal safety for women"],
            ),
            about: PageSeo::new(
                "About EncryptHer - Our Mission & Values",
                "Learn about EncryptHer's mission to empower women through cybersecurity education, privacy awareness, and practical safety training. Founded by cybersecurity analyst Anastasiya.",
                &["EncryptHer mission", "women empowerment", "cybersecurity analyst", "privacy advocacy", "digital safety education"],
            ),
            online_privacy: PageSeo::new(
                "Online Privacy & Security Course - EncryptHer",
                "1 in 3 women experience online harassment. Learn to protect your digital footprint, secure your accounts, and maintain privacy online with our comprehensive privacy course.",
                &["online privacy", "digital security", "cybersecurity course", "data protection", "online harassment prevention"],
            ),
            public_safety: PageSeo::new(
                "Public Safety & Awareness Training - EncryptHer",
                "Research shows awareness and education can reduce women's risk of violence by up to 50%. Turn fear into preparedness with situational awareness and safety training.",
                &["public safety", "situational awareness", "self-defense", "violence prevention", "women safety training"],
            ),
            travel_safety: PageSeo::new(
                "Travel Safety for Women - EncryptHer",
                "1 in 4 female travelers feel unsafe when traveling alone. Learn to identify danger before it starts, from rideshare red flags to hotel security checks.",
                &["travel safety", "women solo travel", "safe travel tips", "travel security", "international travel safety"],
            ),
            digital_advocacy: PageSeo::new(
                "Digital Advocacy - Fighting for Privacy Rights",
                "EncryptHer advocates for comprehensive federal privacy legislation. Learn how to demand privacy protections and join the fight for digital rights in America.",
                &["digital advocacy", "privacy legislation", "data protection laws", "privacy rights", "GDPR", "CCPA", "digital rights"],
            ),
            contact: PageSeo::new(
                "Contact Us - EncryptHer",
                "Get in touch with EncryptHer. We're here to answer questions, provide support, and help with media inquiries.",
                &["contact EncryptHer", "support", "inquiries", "get help"],
            ),
            donate: PageSeo::new(
                "Donate - Support Women's Digital Safety",
                "Support EncryptHer's mission to empower women through digital safety education. Your donation helps us provide free resources and advocacy.",
                &["donate", "support women", "nonprofit", "digital safety donation"],
            ),
        }
    }
}

impl Default for Organization {
    fn default() -> Self {
        Self {
            name: "EncryptHer".to_string(),
            legal_name: "EncryptHer".to_string(),
            founding_date: "2024".to_string(),
            email: "info@encrypther.org".to_string(),
            telephone: None,
            address: None,
        }
    }
}

impl Default for SeoConfig {
    fn default() -> Self {
        let keywords = [
            "women digital safety",
            "online privacy education",
            "cybersecurity for women",
            "personal safety training",
            "travel safety women",
            "public awareness",
            "digital advocacy",
            "privacy legislation",
            "data protection",
            "women empowerment",
            "digital rights",
            "online harassment prevention",
            "situational awareness",
            "cyber safety",
            "women privacy rights",
        ];
        Self {
            site_name: "EncryptHer".to_string(),
            site_url: "https://encrypther.pages.dev".to_string(),
            default_title: "EncryptHer - Your Safety, Your Privacy, Your Power".to_string(),
            default_description: "EncryptHer provides essential education on online privacy, personal safety, and digital advocacy for women worldwide.".to_string(),
            default_image: "/images/hero-privacy.jpg".to_string(),
            author: "Anastasiya, Cybersecurity Analyst and Founder of EncryptHer".to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            locale: "en_US".to_string(),
            theme_color: "#8b5cf6".to_string(),
            twitter_handle: None,
            organization: Organization::default(),
            pages: PageOverrides::default(),
        }
    }
}

/// Fully resolved head metadata for one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub canonical_url: String,
    pub image_url: String,
    pub site_name: String,
    pub author: String,
    pub locale: String,
    pub theme_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_handle: Option<String>,
}

impl SeoConfig {
    /// Join a site-relative path onto the site URL
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!(
            "{}/{}",
            self.site_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Resolve a page's metadata, falling back to the site defaults for empty fields
    pub fn page_meta(&self, page: Page) -> PageMeta {
        let overrides = self.pages.get(page);
        let pick = |value: &str, fallback: &str| {
            if value.trim().is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };
        let keywords = if overrides.keywords.is_empty() {
            self.keywords.clone()
        } else {
            overrides.keywords.clone()
        };
        PageMeta {
            title: pick(&overrides.title, &self.default_title),
            description: pick(&overrides.description, &self.default_description),
            keywords,
            canonical_url: self.absolute_url(&page.path()),
            image_url: self.absolute_url(&self.default_image),
            site_name: self.site_name.clone(),
            author: self.author.clone(),
            locale: self.locale.clone(),
            theme_color: self.theme_color.clone(),
            twitter_handle: self.twitter_handle.clone(),
        }
    }

    /// schema.org `Organization` record for the site's JSON-LD block
    pub fn organization_json_ld(&self, social: &SocialMediaConfig) -> Value {
        let org = &self.organization;
        let mut record = Map::new();
        record.insert("@context".into(), json!("https://schema.org"));
        record.insert("@type".into(), json!("Organization"));
        record.insert("name".into(), json!(org.name));
        record.insert("legalName".into(), json!(org.legal_name));
        record.insert("url".into(), json!(self.site_url));
        record.insert("logo".into(), json!(self.absolute_url(&self.default_image)));
        record.insert("foundingDate".into(), json!(org.founding_date));
        record.insert("email".into(), json!(org.email));
        if let Some(telephone) = &org.telephone {
            record.insert("telephone".into(), json!(telephone));
        }
        if let Some(address) = &org.address {
            record.insert(
                "address".into(),
                json!({
                    "@type": "PostalAddress",
                    "streetAddress": address.street_address,
                    "addressLocality": address.address_locality,
                    "addressRegion": address.address_region,
                    "postalCode": address.postal_code,
                    "addressCountry": address.address_country,
                }),
            );
        }
        let same_as = social.social_media_urls();
        if !same_as.is_empty() {
            record.insert("sameAs".into(), json!(same_as));
        }
        Value::Object(record)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.site_url.starts_with("https://") || self.site_url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl {
                field: "seo.site_url".to_string(),
                value: self.site_url.clone(),
            });
        }
        Ok(())
    }
}
