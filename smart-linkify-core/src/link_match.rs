// smart-linkify-core/src/link_match.rs
//! Core data structures for located entities (candidates), resolved links
//! (accepted matches) and per-kind summaries, plus debug-logging helpers that
//! keep personal data out of logs unless explicitly allowed.

use serde::{Deserialize, Serialize};
use log::debug;
use std::fmt;

use lazy_static::lazy_static;

lazy_static! {
    /// A static boolean that is initialized once to determine if matched text may appear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("SMART_LINKIFY_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// The five recognized substring categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Url,
    Email,
    Phone,
    Hashtag,
    Mention,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Url,
        EntityKind::Email,
        EntityKind::Phone,
        EntityKind::Hashtag,
        EntityKind::Mention,
    ];

    /// Overlap priority; lower wins. URLs come last so an email's local part is
    /// never captured as a bare domain.
    pub fn priority(&self) -> u8 {
        match self {
            EntityKind::Email => 1,
            EntityKind::Phone => 2,
            EntityKind::Hashtag | EntityKind::Mention => 3,
            EntityKind::Url => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Url => "url",
            EntityKind::Email => "email",
            EntityKind::Phone => "phone",
            EntityKind::Hashtag => "hashtag",
            EntityKind::Mention => "mention",
        }
    }

    /// Whether matched text of this kind may identify a person.
    fn is_personal(&self) -> bool {
        matches!(self, EntityKind::Email | EntityKind::Phone | EntityKind::Mention)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A located, not-yet-accepted occurrence of an entity.
///
/// `start..end` is a byte range into the working text, always on `char`
/// boundaries, with `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub start: usize,
    pub end: usize,
    pub original_text: String,
    pub kind: EntityKind,
    pub priority: u8,
    /// The resolved link target, after policy filters and hooks.
    pub href: String,
    /// The unescaped text shown inside the link (truncated or formatted).
    pub display_text: String,
}

impl CandidateMatch {
    pub fn new(start: usize, end: usize, original_text: &str, kind: EntityKind, href: String, display_text: String) -> Self {
        Self {
            start,
            end,
            original_text: original_text.to_string(),
            kind,
            priority: kind.priority(),
            href,
            display_text,
        }
    }

    /// True when the two spans share at least one index.
    pub fn overlaps(&self, other: &CandidateMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A candidate that survived overlap resolution, paired with its markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedMatch {
    #[serde(flatten)]
    pub candidate: CandidateMatch,
    pub rendered_markup: String,
}

/// Summary of all accepted matches of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkifySummaryItem {
    pub kind: EntityKind,
    pub occurrences: usize,
    pub original_texts: Vec<String>,
    pub hrefs: Vec<String>,
}

/// Groups accepted matches by kind, in `EntityKind::ALL` order; kinds with no
/// matches are omitted.
pub fn summarize_matches(matches: &[AcceptedMatch]) -> Vec<LinkifySummaryItem> {
    EntityKind::ALL
        .iter()
        .filter_map(|kind| {
            let of_kind: Vec<&AcceptedMatch> = matches.iter().filter(|m| m.candidate.kind == *kind).collect();
            if of_kind.is_empty() {
                return None;
            }
            Some(LinkifySummaryItem {
                kind: *kind,
                occurrences: of_kind.len(),
                original_texts: of_kind.iter().map(|m| m.candidate.original_text.clone()).collect(),
                hrefs: of_kind.iter().map(|m| m.candidate.href.clone()).collect(),
            })
        })
        .collect()
}

pub fn elide_text(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let len = s.chars().count();
    if len <= MAX_LEN {
        "[ELIDED]".to_string()
    } else {
        format!("[ELIDED: {} chars]", len)
    }
}

fn get_loggable_content(kind: EntityKind, text: &str) -> String {
    if !kind.is_personal() || *PII_DEBUG_ALLOWED {
        text.to_string()
    } else {
        elide_text(text)
    }
}

pub fn log_candidate_debug(module_path: &str, kind: EntityKind, text: &str, start: usize, end: usize) {
    debug!(
        "{} Candidate {} at {}..{}: '{}'",
        module_path,
        kind,
        start,
        end,
        get_loggable_content(kind, text)
    );
}

pub fn log_rejection_debug(module_path: &str, kind: EntityKind, text: &str, reason: &str) {
    debug!(
        "{} Rejected {} '{}': {}",
        module_path,
        kind,
        get_loggable_content(kind, text),
        reason
    );
}
