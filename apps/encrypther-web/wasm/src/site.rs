//! Site configuration accessors for page scripts
//!
//! The configuration is compiled in; these functions expose the filtered views
//! the footer, analytics loader and `<head>` need.

use lazy_static::lazy_static;
use site_config::seo::{Page, PageMeta};
use site_config::social::SocialPlatform;
use site_config::{Environment, SiteConfig};
use wasm_bindgen::prelude::*;

lazy_static! {
    static ref SITE: SiteConfig = SiteConfig::default();
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Internal lookup (testable without JsValue)
fn page_meta_internal(slug: &str) -> Result<PageMeta, String> {
    Page::from_slug(slug)
        .map(|page| SITE.seo.page_meta(page))
        .ok_or_else(|| format!("Unknown page: {}", slug))
}

fn enabled_platforms_internal() -> Vec<SocialPlatform> {
    SITE.social
        .enabled_platforms()
        .into_iter()
        .cloned()
        .collect()
}

fn organization_json_ld_internal() -> String {
    SITE.seo.organization_json_ld(&SITE.social).to_string()
}

/// Footer icons: every enabled platform, in footer order
#[wasm_bindgen(js_name = getEnabledPlatforms)]
pub fn get_enabled_platforms() -> Result<JsValue, JsValue> {
    to_js(&enabled_platforms_internal())
}

/// Enabled profile URLs, email excluded
#[wasm_bindgen(js_name = getSocialMediaUrls)]
pub fn get_social_media_urls() -> Result<JsValue, JsValue> {
    to_js(&SITE.social.social_media_urls())
}

#[wasm_bindgen(js_name = shouldEnableGA)]
pub fn should_enable_ga() -> bool {
    SITE.analytics.should_enable_ga(Environment::current())
}

#[wasm_bindgen(js_name = shouldEnableCF)]
pub fn should_enable_cf() -> bool {
    SITE.analytics.should_enable_cf(Environment::current())
}

/// GA4 measurement id, only when GA should load in this build
#[wasm_bindgen(js_name = getMeasurementId)]
pub fn get_measurement_id() -> Option<String> {
    should_enable_ga().then(|| SITE.analytics.google_analytics.measurement_id.clone())
}

/// Resolved `<head>` metadata for a page slug such as `online-privacy`
#[wasm_bindgen(js_name = getPageMeta)]
pub fn get_page_meta(slug: &str) -> Result<JsValue, JsValue> {
    let meta = page_meta_internal(slug).map_err(|e| JsValue::from_str(&e))?;
    to_js(&meta)
}

/// schema.org Organization record as a JSON string for `application/ld+json`
#[wasm_bindgen(js_name = getOrganizationJsonLd)]
pub fn get_organization_json_ld() -> String {
    organization_json_ld_internal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_meta_lookup() {
        let meta = page_meta_internal("travel-safety").unwrap();
        assert_eq!(meta.title, "Travel Safety for Women - EncryptHer");
        assert!(page_meta_internal("blog").is_err());
    }

    #[test]
    fn test_default_footer_is_email_only() {
        let platforms = enabled_platforms_internal();
        assert_eq!(platforms.len(), 1);
        assert_eq!(platforms[0].icon, "Mail");
    }

    #[test]
    fn test_organization_json_ld_is_valid_json() {
        let ld: serde_json::Value = serde_json::from_str(&organization_json_ld_internal()).unwrap();
        assert_eq!(ld["name"], "EncryptHer");
    }

    #[test]
    fn test_analytics_off_in_default_build() {
        assert!(!should_enable_ga());
        assert!(!should_enable_cf());
        assert_eq!(get_measurement_id(), None);
    }
}
