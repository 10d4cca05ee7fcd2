//! resolver.rs - Overlap resolution and output assembly.
//!
//! Candidates are visited in (priority, start) order and accepted unless they
//! share an index with an already accepted span. Accepted spans are kept in a
//! `BTreeMap` keyed by start, so each overlap test is a single ordered lookup.
//!
//! License: MIT OR APACHE 2.0

use std::collections::BTreeMap;

use crate::link_match::{log_rejection_debug, AcceptedMatch, CandidateMatch};

/// Returns the candidates that survive overlap resolution, sorted by start.
pub fn resolve_overlaps(mut candidates: Vec<CandidateMatch>) -> Vec<CandidateMatch> {
    // Stable: equal keys keep scanner order.
    candidates.sort_by_key(|c| (c.priority, c.start));

    let mut taken: BTreeMap<usize, usize> = BTreeMap::new();
    let mut accepted = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        // Accepted spans are disjoint, so the one with the greatest start below
        // `candidate.end` is the only one that can reach past `candidate.start`.
        let overlaps = taken
            .range(..candidate.end)
            .next_back()
            .is_some_and(|(_, &end)| end > candidate.start);
        if overlaps {
            log_rejection_debug(module_path!(), candidate.kind, &candidate.original_text, "overlaps a higher-priority match");
            continue;
        }
        taken.insert(candidate.start, candidate.end);
        accepted.push(candidate);
    }

    accepted.sort_by_key(|c| c.start);
    accepted
}

/// Interleaves the untouched text with each match's markup, left to right.
///
/// `matches` must be sorted by start and pairwise non-overlapping.
pub fn assemble(text: &str, matches: &[AcceptedMatch]) -> String {
    let extra: usize = matches.iter().map(|m| m.rendered_markup.len()).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut last = 0;
    for m in matches {
        out.push_str(&text[last..m.candidate.start]);
        out.push_str(&m.rendered_markup);
        last = m.candidate.end;
    }
    out.push_str(&text[last..]);
    out
}
