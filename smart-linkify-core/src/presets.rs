// smart-linkify-core/src/presets.rs
//! Named, reusable option bundles and the preset loader.
//!
//! A preset is an ordinary `LinkifyOptions` value. Callers layer their own
//! settings on top with [`crate::config::merge_options`]. Presets can also be
//! kept as YAML files; `load_preset_by_name` looks for them in the user's
//! preset directories when the name is not a built-in.
//!
//! License: MIT OR APACHE 2.0

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::debug;

use crate::config::{AriaLabel, DomainStyle, LinkTarget, LinkifyOptions, TruncateStrategy, UrlBuilder};

/// Built-in preset names with a one-line description, in display order.
pub const PRESETS: &[(&str, &str)] = &[
    ("minimal", "Clean look without underlines"),
    ("secure", "New tab, safe rel, tracking removed, input sanitized"),
    ("social", "Social blue, linked hashtags and mentions"),
    ("professional", "Conservative styling for business content"),
    ("compact", "Smart-truncates long URLs with a tooltip"),
    ("inline", "Subtle same-tab links that blend with text"),
    ("email", "Detects email addresses, strips tracking"),
    ("documentation", "Document icon, tooltip, new tab"),
    ("safe", "Sanitized input, nofollow, screen reader hint"),
    ("mobile", "Short links plus tappable phones and emails"),
    ("accessible", "ARIA label, role, tab order and screen reader text"),
    ("contact", "Emails and phone numbers in the same tab"),
    ("github", "GitHub link styling and @user profiles"),
    ("analytics", "Click tracking enabled, tracking parameters kept"),
];

const NEW_WINDOW_HINT: &str = "Opens in new window";

/// Names of all built-in presets.
pub fn preset_names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

/// Returns the built-in preset called `name`.
pub fn preset(name: &str) -> Option<LinkifyOptions> {
    let options = match name {
        "minimal" => LinkifyOptions { underline: Some(false), ..Default::default() },
        "secure" => LinkifyOptions {
            target: Some(LinkTarget::Blank),
            rel: Some("noopener noreferrer".into()),
            remove_tracking: Some(true),
            sanitize_input: Some(true),
            ..Default::default()
        },
        "social" => LinkifyOptions {
            color: Some("#1da1f2".into()),
            underline: Some(false),
            detect_hashtags: Some(true),
            hashtag_url: Some(UrlBuilder::Template("https://twitter.com/hashtag/{tag}".into())),
            detect_mentions: Some(true),
            mention_url: Some(UrlBuilder::Template("https://twitter.com/{username}".into())),
            ..Default::default()
        },
        "professional" => LinkifyOptions {
            color: Some("#0066cc".into()),
            target: Some(LinkTarget::Blank),
            underline: Some(true),
            ..Default::default()
        },
        "compact" => LinkifyOptions {
            max_length: Some(40),
            truncate_strategy: Some(TruncateStrategy::Smart),
            show_tooltip: Some(true),
            underline: Some(false),
            ..Default::default()
        },
        "inline" => LinkifyOptions {
            target: Some(LinkTarget::SelfContext),
            underline: Some(false),
            ..Default::default()
        },
        "email" => LinkifyOptions {
            detect_emails: Some(true),
            remove_tracking: Some(true),
            aria_label: Some(AriaLabel::Text("Send email or open link".into())),
            ..Default::default()
        },
        "documentation" => LinkifyOptions {
            icon_before: Some("📄 ".into()),
            show_tooltip: Some(true),
            target: Some(LinkTarget::Blank),
            ..Default::default()
        },
        "safe" => LinkifyOptions {
            sanitize_input: Some(true),
            remove_tracking: Some(true),
            rel: Some("noopener noreferrer nofollow".into()),
            screen_reader_text: Some(NEW_WINDOW_HINT.into()),
            ..Default::default()
        },
        "mobile" => LinkifyOptions {
            max_length: Some(30),
            truncate_strategy: Some(TruncateStrategy::Smart),
            detect_phones: Some(true),
            detect_emails: Some(true),
            underline: Some(false),
            ..Default::default()
        },
        "accessible" => LinkifyOptions {
            aria_label: Some(AriaLabel::Text("External link".into())),
            screen_reader_text: Some(NEW_WINDOW_HINT.into()),
            underline: Some(true),
            role: Some("link".into()),
            tab_index: Some(0),
            ..Default::default()
        },
        "contact" => LinkifyOptions {
            detect_emails: Some(true),
            detect_phones: Some(true),
            target: Some(LinkTarget::SelfContext),
            ..Default::default()
        },
        "github" => LinkifyOptions {
            detect_mentions: Some(true),
            mention_url: Some(UrlBuilder::Template("https://github.com/{username}".into())),
            ..Default::default()
        }
        .with_domain_style(
            "github.com",
            DomainStyle {
                color: Some("#24292f".into()),
                icon: Some("🐙 ".into()),
                class_name: Some("github-link".into()),
                ..Default::default()
            },
        ),
        "analytics" => LinkifyOptions {
            track_clicks: Some(true),
            remove_tracking: Some(false),
            ..Default::default()
        },
        _ => return None,
    };
    Some(options)
}

/// Every built-in preset, in `PRESETS` order.
pub fn all_presets() -> Vec<(&'static str, LinkifyOptions)> {
    preset_names()
        .filter_map(|name| preset(name).map(|options| (name, options)))
        .collect()
}

/// Directories searched for `<name>.yaml` preset files.
pub fn preset_candidate_paths(name: &str) -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::home_dir().map(|p| p.join(".smart-linkify").join("presets")),
        dirs::config_dir().map(|p| p.join("smart-linkify").join("presets")),
        Some(PathBuf::from("./presets")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(format!("{}.yaml", name)))
        .collect()
}

/// Resolves a preset from a file path, a built-in name, or a YAML file in one
/// of the preset directories, in that order.
pub fn load_preset_by_name(name_or_path: &str) -> Result<LinkifyOptions> {
    debug!("Attempting to load preset: '{}'", name_or_path);

    let path = Path::new(name_or_path);
    if path.is_file() {
        debug!("Preset is a file path. Loading directly from: {}", path.display());
        return LinkifyOptions::load_from_file(path);
    }

    if let Some(options) = preset(name_or_path) {
        debug!("Using built-in preset '{}'.", name_or_path);
        return Ok(options);
    }

    let found = preset_candidate_paths(name_or_path)
        .into_iter()
        .find(|p| p.is_file())
        .with_context(|| {
            format!(
                "Preset '{}' not found. It is not a file path, a built-in preset, or a file in the preset directories.",
                name_or_path
            )
        })?;
    LinkifyOptions::load_from_file(&found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_preset_exists() {
        assert_eq!(PRESETS.len(), 14);
        for name in preset_names() {
            assert!(preset(name).is_some(), "missing preset {}", name);
        }
        assert!(preset("nope").is_none());
    }

    #[test]
    fn test_presets_pass_validation_and_serialize() {
        for (name, options) in all_presets() {
            options.validate().unwrap_or_else(|e| panic!("{} invalid: {}", name, e));
            options.to_yaml_string().unwrap_or_else(|e| panic!("{} not serializable: {}", name, e));
        }
    }

    #[test]
    fn test_candidate_paths_end_with_yaml_name() {
        let paths = preset_candidate_paths("mine");
        assert!(!paths.is_empty());
        assert!(paths.iter().all(|p| p.ends_with("mine.yaml")));
    }

    #[test]
    fn test_unknown_preset_is_an_error() {
        let err = load_preset_by_name("definitely-not-a-preset-xyz").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
