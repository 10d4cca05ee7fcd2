//! patterns.rs - Compiles and caches the entity patterns.
//!
//! Every pattern is compiled once per process and shared. The `regex` crate
//! executes with finite automata, so matching time is linear in the input no
//! matter how the patterns are written; the explicit repetition bounds below
//! additionally cap how far a single match can extend.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};

use crate::errors::LinkifyError;
use crate::link_match::EntityKind;

/// Name of the capture group holding the entity when a pattern also consumes
/// the character in front of it.
pub const ENTITY_GROUP: &str = "entity";

/// Upper bound on compiled program size. The bounded `{0,2000}` path repetition
/// of the URL pattern needs more than the crate default.
const COMPILED_SIZE_LIMIT: usize = 32 * (1 << 20);

/// URL: optional scheme, optional `www.`, dot-separated labels ending in a
/// 2+ letter label, bounded path and query. The leading group stands in for a
/// lookbehind: the URL must start the text or follow a character that is
/// neither `@` nor a word character.
const URL_PATTERN: &str = r"(?:\A|[^@A-Za-z0-9_])(?P<entity>(?i:(?:https?://)?(?:www\.)?(?:[a-z0-9-]+\.)+[a-z]{2,}(?:/[^\s]{0,2000})?(?:\?[^\s]{0,1000})?))";

// Word boundaries are ASCII (`(?-u:\b)`) to agree with the ASCII classes: a
// neighbouring non-ASCII letter ends an entity instead of hiding it.
const EMAIL_PATTERN: &str = r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)";
const PHONE_PATTERN: &str = r"(?:\+?[0-9]{1,3}[-.\s]?)?\(?[0-9]{3}\)?[-.\s]?[0-9]{3}[-.\s]?[0-9]{4}";
const HASHTAG_PATTERN: &str = r"#[A-Za-z0-9_]{1,30}(?-u:\b)";
const MENTION_PATTERN: &str = r"@[A-Za-z0-9_]{1,15}(?-u:\b)";

/// A compiled entity pattern.
#[derive(Debug)]
pub struct CompiledPattern {
    pub kind: EntityKind,
    pub regex: Regex,
    /// Capture group to report instead of the whole match.
    pub group: Option<&'static str>,
}

/// All five entity patterns.
#[derive(Debug)]
pub struct CompiledPatterns {
    pub url: CompiledPattern,
    pub email: CompiledPattern,
    pub phone: CompiledPattern,
    pub hashtag: CompiledPattern,
    pub mention: CompiledPattern,
}

impl CompiledPatterns {
    pub fn get(&self, kind: EntityKind) -> &CompiledPattern {
        match kind {
            EntityKind::Url => &self.url,
            EntityKind::Email => &self.email,
            EntityKind::Phone => &self.phone,
            EntityKind::Hashtag => &self.hashtag,
            EntityKind::Mention => &self.mention,
        }
    }
}

static COMPILED_PATTERNS: OnceCell<CompiledPatterns> = OnceCell::new();

/// Compiles a single pattern with the shared size limit.
pub fn compile_pattern(name: &str, pattern: &str) -> Result<Regex, LinkifyError> {
    RegexBuilder::new(pattern)
        .size_limit(COMPILED_SIZE_LIMIT)
        .build()
        .map_err(|source| LinkifyError::PatternCompilation { name: name.to_string(), source })
}

fn compile_entity(kind: EntityKind, pattern: &str, group: Option<&'static str>) -> Result<CompiledPattern, LinkifyError> {
    let regex = compile_pattern(kind.as_str(), pattern)?;
    log::debug!(
        target: "smart_linkify_core::scanners",
        "Pattern '{}' compiled successfully.",
        kind
    );
    Ok(CompiledPattern { kind, regex, group })
}

fn compile_all() -> Result<CompiledPatterns, LinkifyError> {
    debug!("Compiling entity patterns.");
    Ok(CompiledPatterns {
        url: compile_entity(EntityKind::Url, URL_PATTERN, Some(ENTITY_GROUP))?,
        email: compile_entity(EntityKind::Email, EMAIL_PATTERN, None)?,
        phone: compile_entity(EntityKind::Phone, PHONE_PATTERN, None)?,
        hashtag: compile_entity(EntityKind::Hashtag, HASHTAG_PATTERN, None)?,
        mention: compile_entity(EntityKind::Mention, MENTION_PATTERN, None)?,
    })
}

/// Returns the process-wide compiled patterns, compiling them on first use.
pub fn compiled_patterns() -> Result<&'static CompiledPatterns, LinkifyError> {
    COMPILED_PATTERNS.get_or_try_init(compile_all)
}
