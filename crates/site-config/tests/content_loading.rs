//! Loading content collections and site configuration from disk

use pretty_assertions::assert_eq;
use site_config::content::{load_collection, visible_sections};
use site_config::{Collection, SiteConfig};
use std::fs;

#[test]
fn test_load_collection_reads_markdown_only() {
    let root = tempfile::tempdir().unwrap();
    let about = root.path().join("about");
    fs::create_dir_all(&about).unwrap();
    fs::write(
        about.join("mission.md"),
        "---\nsection: mission\norder: 1\n---\nOur mission.\n",
    )
    .unwrap();
    fs::write(
        about.join("founder.md"),
        "---\nsection: founder\norder: 0\ntitle: Meet Anastasiya\n---\nFounder story.\n",
    )
    .unwrap();
    fs::write(
        about.join("hidden.md"),
        "---\nsection: hidden\nenabled: false\n---\n",
    )
    .unwrap();
    fs::write(about.join("notes.txt"), "not content").unwrap();

    let entries = load_collection(root.path(), Collection::About).unwrap();
    let slugs: Vec<_> = entries.iter().map(|e| e.slug.as_str()).collect();
    assert_eq!(slugs, vec!["founder", "hidden", "mission"]);

    let visible: Vec<_> = visible_sections(&entries)
        .iter()
        .map(|e| e.frontmatter.section.as_str())
        .collect();
    assert_eq!(visible, vec!["founder", "mission"]);
}

#[test]
fn test_missing_collection_dir_is_empty() {
    let root = tempfile::tempdir().unwrap();
    let entries = load_collection(root.path(), Collection::Donate).unwrap();
    assert!(entries.is_empty());
}

#[test]
fn test_invalid_frontmatter_names_the_file() {
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("contact");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("form.md"), "---\ntitle: Missing section\n---\n").unwrap();

    let err = load_collection(root.path(), Collection::Contact).unwrap_err();
    assert!(format!("{:#}", err).contains("form.md"));
}

#[test]
fn test_site_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("site.toml");
    fs::write(
        &path,
        "[seo]\nsite_url = \"https://encrypther.org\"\n\n[social.github]\nname = \"GitHub\"\nurl = \"https://github.com/encrypther\"\nenabled = true\nicon = \"Github\"\naria_label = \"GitHub\"\n",
    )
    .unwrap();

    let config = SiteConfig::from_file(&path).unwrap();
    assert_eq!(config.seo.site_url, "https://encrypther.org");
    let ld = config.seo.organization_json_ld(&config.social);
    assert_eq!(ld["sameAs"][0], "https://github.com/encrypther");
}

#[test]
fn test_site_config_missing_file() {
    let err = SiteConfig::from_file("/nonexistent/site.toml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
