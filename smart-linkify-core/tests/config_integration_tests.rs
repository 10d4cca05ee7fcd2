// smart-linkify-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use smart_linkify_core::config::{merge_options, LinkTarget, LinkifyOptions, TruncateStrategy, UrlBuilder};
use smart_linkify_core::linkify;

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r####"
color: "#ff0000"
target: _self
underline: false
max_length: 25
truncate_strategy: middle
truncate_text: "~"
detect_phones: true
phone_format: "###-###-####"
hashtag_url: "https://example.com/tags/{tag}"
detect_hashtags: true
blocklist:
  - evil.com
domain_styles:
  - domain: example.com
    class_name: ex
custom_styles:
  fontSize: 12px
"####;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let options = LinkifyOptions::load_from_file(file.path())?;

    assert_eq!(options.color.as_deref(), Some("#ff0000"));
    assert_eq!(options.target, Some(LinkTarget::SelfContext));
    assert_eq!(options.truncate_strategy, Some(TruncateStrategy::Middle));
    assert!(matches!(options.hashtag_url, Some(UrlBuilder::Template(_))));

    let out = linkify("example.com evil.com #yaml (555) 123-4567", &options)?;
    assert!(out.contains(r#"class="ex""#));
    assert!(out.contains("font-size:12px"));
    assert!(!out.contains(r#"href="https://evil.com""#));
    assert!(out.contains(r#"href="https://example.com/tags/yaml""#));
    assert!(out.contains(">555-123-4567</a>"));
    Ok(())
}

#[test]
fn test_invalid_values_fail_validation() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"max_length: 0\n")?;
    let err = LinkifyOptions::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains("max_length"));
    Ok(())
}

#[test]
fn test_invalid_yaml_reports_path() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"target: [not, a, target]\n")?;
    let err = LinkifyOptions::load_from_file(file.path()).unwrap_err();
    assert!(format!("{:#}", err).contains(&file.path().display().to_string()));
    Ok(())
}

#[test]
fn test_missing_file() {
    assert!(LinkifyOptions::load_from_file("/definitely/not/here.yaml").is_err());
}

#[test]
fn test_yaml_round_trip_omits_unset_fields() -> Result<()> {
    let options = LinkifyOptions { color: Some("red".into()), detect_emails: Some(true), ..Default::default() };
    let yaml = options.to_yaml_string()?;
    assert!(yaml.contains("color: red"));
    assert!(!yaml.contains("null"));
    let back = LinkifyOptions::from_yaml_str(&yaml)?;
    assert_eq!(back.color.as_deref(), Some("red"));
    assert_eq!(back.detect_emails, Some(true));
    Ok(())
}

#[test]
fn test_hook_backed_options_can_not_be_serialized() {
    let options = LinkifyOptions::default().with_hashtag_url(|t| t.to_string());
    assert!(options.to_yaml_string().is_err());
}

#[test]
fn test_merge_without_overrides_is_identity() {
    let base = LinkifyOptions { color: Some("blue".into()), ..Default::default() };
    let merged = merge_options(base, None);
    assert_eq!(merged.color.as_deref(), Some("blue"));
}
