//! Entity scanners.
//!
//! Each scanner is a pure function of the text: it returns a fresh list of
//! non-overlapping matches for one entity kind and keeps no position state
//! between calls. Scanners are independent, so the order in which they run has
//! no effect on the final output; conflicts are settled by the resolver.
//!
//! The URL scanner always runs. The others are gated by their `detect_*`
//! option, and hashtags and mentions additionally need a URL builder.

pub mod patterns;
pub mod regex_scanner;

use log::debug;

use crate::config::LinkifyOptions;
use crate::errors::LinkifyError;
use crate::link_match::EntityKind;
use patterns::compiled_patterns;
use regex_scanner::RegexScanner;

/// A raw occurrence located by a scanner: a byte span and the matched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawMatch<'t> {
    pub start: usize,
    pub end: usize,
    pub text: &'t str,
}

/// A stateless recognizer for one entity kind.
pub trait EntityScanner: Send + Sync {
    fn kind(&self) -> EntityKind;

    /// Returns every non-overlapping match in `text`, left to right.
    fn scan<'t>(&self, text: &'t str) -> Vec<RawMatch<'t>>;
}

/// Whether `kind` should be scanned under `options`.
pub fn is_enabled(kind: EntityKind, options: &LinkifyOptions) -> bool {
    match kind {
        EntityKind::Url => true,
        EntityKind::Email => LinkifyOptions::flag(options.detect_emails),
        EntityKind::Phone => LinkifyOptions::flag(options.detect_phones),
        EntityKind::Hashtag => LinkifyOptions::flag(options.detect_hashtags) && options.hashtag_url.is_some(),
        EntityKind::Mention => LinkifyOptions::flag(options.detect_mentions) && options.mention_url.is_some(),
    }
}

/// Builds the scanners enabled by `options`.
pub fn enabled_scanners(options: &LinkifyOptions) -> Result<Vec<RegexScanner>, LinkifyError> {
    let patterns = compiled_patterns()?;
    let scanners: Vec<RegexScanner> = EntityKind::ALL
        .iter()
        .filter(|kind| is_enabled(**kind, options))
        .map(|kind| RegexScanner::new(patterns.get(*kind)))
        .collect();
    debug!("Enabled scanners: {:?}", scanners.iter().map(|s| s.kind()).collect::<Vec<_>>());
    Ok(scanners)
}
