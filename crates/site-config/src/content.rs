//! Content collections and their frontmatter schema
//!
//! Every page section lives in a markdown file under one of the eight
//! collection directories. The YAML frontmatter of each file is validated
//! against [`ContentFrontmatter`]; all collections share the same schema.

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::trace;

use crate::error::ContentError;

const DELIMITER: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collection {
    Index,
    About,
    OnlinePrivacy,
    TravelSafety,
    PublicSafety,
    DigitalAdvocacy,
    Donate,
    Contact,
}

impl Collection {
    pub const ALL: [Collection; 8] = [
        Collection::Index,
        Collection::About,
        Collection::OnlinePrivacy,
        Collection::TravelSafety,
        Collection::PublicSafety,
        Collection::DigitalAdvocacy,
        Collection::Donate,
        Collection::Contact,
    ];

    /// Directory name under the content root
    pub fn dir_name(&self) -> &'static str {
        match self {
            Collection::Index => "index",
            Collection::About => "about",
            Collection::OnlinePrivacy => "online-privacy",
            Collection::TravelSafety => "travel-safety",
            Collection::PublicSafety => "public-safety",
            Collection::DigitalAdvocacy => "digital-advocacy",
            Collection::Donate => "donate",
            Collection::Contact => "contact",
        }
    }

    pub fn from_dir(name: &str) -> Result<Self, ContentError> {
        Self::ALL
            .into_iter()
            .find(|c| c.dir_name() == name)
            .ok_or_else(|| ContentError::UnknownCollection(name.to_string()))
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Frontmatter shared by all collections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFrontmatter {
    /// Hidden sections stay in the repository but are not rendered
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Position within the page, ascending
    #[serde(default)]
    pub order: f64,
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<NaiveDate>,
}

fn default_enabled() -> bool {
    true
}

/// One parsed content file
#[derive(Debug, Clone, PartialEq)]
pub struct ContentEntry {
    pub collection: Collection,
    /// File stem, e.g. `mission` for `about/mission.md`
    pub slug: String,
    pub frontmatter: ContentFrontmatter,
    pub body: String,
}

/// Split a markdown document into its YAML frontmatter and body
pub fn split_frontmatter(markdown: &str) -> Result<(&str, &str), ContentError> {
    let text = markdown.strip_prefix('\u{feff}').unwrap_or(markdown);
    let rest = match text.split_once('\n') {
        Some((first, rest)) if first.trim_end() == DELIMITER => rest,
        _ => return Err(ContentError::MissingFrontmatter),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == DELIMITER {
            let yaml = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Ok((yaml, body));
        }
        offset += line.len();
    }
    Err(ContentError::UnterminatedFrontmatter)
}

/// Parse and validate a content file
pub fn parse_entry(
    collection: Collection,
    slug: &str,
    markdown: &str,
) -> Result<ContentEntry, ContentError> {
    let (yaml, body) = split_frontmatter(markdown)?;
    let frontmatter: ContentFrontmatter = serde_yaml::from_str(yaml)?;
    trace!(%collection, slug, section = %frontmatter.section, "parsed content entry");
    Ok(ContentEntry {
        collection,
        slug: slug.to_string(),
        frontmatter,
        body: body.trim_start_matches(&['\r', '\n'][..]).to_string(),
    })
}

/// Enabled entries sorted by `order`; ties keep their input order
pub fn visible_sections(entries: &[ContentEntry]) -> Vec<&ContentEntry> {
    let mut visible: Vec<_> = entries.iter().filter(|e| e.frontmatter.enabled).collect();
    visible.sort_by(|a, b| a.frontmatter.order.total_cmp(&b.frontmatter.order));
    visible
}

/// Load every `.md` file of a collection under `content_root`, sorted by file name
///
/// A missing collection directory yields no entries.
pub fn load_collection(content_root: &Path, collection: Collection) -> anyhow::Result<Vec<ContentEntry>> {
    let dir = content_root.join(collection.dir_name());
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut paths: Vec<_> = fs::read_dir(&dir)
        .with_context(|| format!("Failed to read collection directory: {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect();
    paths.sort();

    paths
        .iter()
        .map(|path| {
            let markdown = fs::read_to_string(path)
                .with_context(|| format!("Failed to read content file: {}", path.display()))?;
            let slug = path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_default();
            parse_entry(collection, &slug, &markdown)
                .with_context(|| format!("Invalid frontmatter in {}", path.display()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HERO: &str = "---\nsection: hero\ntitle: Your Safety, Your Privacy, Your Power\n---\n\nWelcome to EncryptHer.\n";

    #[test]
    fn test_defaults_applied() {
        let entry = parse_entry(Collection::Index, "hero", HERO).unwrap();
        let fm = &entry.frontmatter;

        assert!(fm.enabled);
        assert_eq!(fm.order, 0.0);
        assert_eq!(fm.section, "hero");
        assert_eq!(fm.title.as_deref(), Some("Your Safety, Your Privacy, Your Power"));
        assert_eq!(fm.publish_date, None);
        assert_eq!(entry.body, "Welcome to EncryptHer.\n");
    }

    #[test]
    fn test_section_is_required() {
        let doc = "---\ntitle: No section\n---\nbody";
        let err = parse_entry(Collection::About, "broken", doc).unwrap_err();
        assert!(matches!(err, ContentError::InvalidFrontmatter(_)));
    }

    #[test]
    fn test_dates_and_camel_case_keys() {
        let doc = "---\nsection: course\norder: 2\nenabled: false\npublishDate: 2024-03-08\nupdateDate: 2024-06-01\n---\n";
        let entry = parse_entry(Collection::OnlinePrivacy, "course", doc).unwrap();
        let fm = entry.frontmatter;

        assert!(!fm.enabled);
        assert_eq!(fm.order, 2.0);
        assert_eq!(fm.publish_date, NaiveDate::from_ymd_opt(2024, 3, 8));
        assert_eq!(fm.update_date, NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(entry.body, "");
    }

    #[test]
    fn test_missing_and_unterminated_frontmatter() {
        assert!(matches!(
            split_frontmatter("# Just markdown"),
            Err(ContentError::MissingFrontmatter)
        ));
        assert!(matches!(
            split_frontmatter("---\nsection: x\n"),
            Err(ContentError::UnterminatedFrontmatter)
        ));
    }

    #[test]
    fn test_crlf_frontmatter() {
        let (yaml, body) = split_frontmatter("---\r\nsection: hero\r\n---\r\nBody").unwrap();
        assert_eq!(yaml, "section: hero\r\n");
        assert_eq!(body, "Body");
    }

    #[test]
    fn test_collection_dirs() {
        for collection in Collection::ALL {
            assert_eq!(Collection::from_dir(collection.dir_name()).unwrap(), collection);
        }
        assert!(matches!(
            Collection::from_dir("blog"),
            Err(ContentError::UnknownCollection(_))
        ));
    }

    #[test]
    fn test_visible_sections_sorted_and_filtered() {
        let entry = |slug: &str, order: f64, enabled: bool| ContentEntry {
            collection: Collection::About,
            slug: slug.to_string(),
            frontmatter: ContentFrontmatter {
                enabled,
                order,
                section: slug.to_string(),
                title: None,
                description: None,
                image: None,
                publish_date: None,
                update_date: None,
            },
            body: String::new(),
        };
        let entries = vec![
            entry("values", 2.0, true),
            entry("draft", 0.0, false),
            entry("mission", 1.0, true),
            entry("team", 2.0, true),
        ];

        let slugs: Vec<_> = visible_sections(&entries)
            .iter()
            .map(|e| e.slug.as_str())
            .collect();
        assert_eq!(slugs, vec!["mission", "values", "team"]);
    }
}
