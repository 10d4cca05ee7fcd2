// smart-linkify/src/commands/options.rs
//! Resolves `LinkifyOptions` from command-line arguments.
//!
//! Layers, lowest first: preset, options file, flags. Each layer only sets
//! what it mentions.

use anyhow::{Context, Result};
use log::{debug, info};

use smart_linkify_core::{load_preset_by_name, merge_options, LinkifyOptions, UrlBuilder};

use crate::cli::OptionArgs;

/// Converts the flags alone into options. Flags that are off or empty leave
/// the field unset so lower layers show through.
pub fn options_from_flags(args: &OptionArgs) -> LinkifyOptions {
    fn set(flag: bool) -> Option<bool> {
        flag.then_some(true)
    }
    fn non_empty(values: &[String]) -> Option<Vec<String>> {
        (!values.is_empty()).then(|| values.to_vec())
    }

    LinkifyOptions {
        detect_emails: set(args.emails),
        detect_phones: set(args.phones),
        detect_hashtags: args.hashtag_url.as_ref().map(|_| true),
        hashtag_url: args.hashtag_url.clone().map(UrlBuilder::Template),
        detect_mentions: args.mention_url.as_ref().map(|_| true),
        mention_url: args.mention_url.clone().map(UrlBuilder::Template),
        remove_tracking: set(args.remove_tracking),
        sanitize_input: set(args.sanitize),
        allowed_tags: non_empty(&args.allowed_tags),
        blocklist: non_empty(&args.block),
        allowlist: non_empty(&args.allow),
        max_length: args.max_length,
        truncate_strategy: args.truncate.map(Into::into),
        target: args.target.map(Into::into),
        max_input_length: args.max_input_length,
        ..Default::default()
    }
}

/// Builds the effective options for a run.
pub fn resolve_options(args: &OptionArgs) -> Result<LinkifyOptions> {
    let mut options = match &args.preset {
        Some(name) => {
            info!("Using preset '{}'.", name);
            load_preset_by_name(name).with_context(|| format!("Failed to load preset '{}'", name))?
        }
        None => LinkifyOptions::default(),
    };

    if let Some(path) = &args.config {
        let file_options = LinkifyOptions::load_from_file(path)
            .with_context(|| format!("Failed to load options file '{}'", path.display()))?;
        options = merge_options(options, Some(file_options));
    }

    options = merge_options(options, Some(options_from_flags(args)));
    options.validate().context("Invalid linkify options")?;
    debug!("Resolved linkify options.");
    Ok(options)
}
