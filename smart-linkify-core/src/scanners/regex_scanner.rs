//! A pattern-driven `EntityScanner`.
//! License: MIT OR APACHE 2.0

use crate::link_match::{log_candidate_debug, EntityKind};
use crate::scanners::patterns::CompiledPattern;
use crate::scanners::{EntityScanner, RawMatch};

/// Scans text with one compiled entity pattern.
#[derive(Debug, Clone, Copy)]
pub struct RegexScanner {
    pattern: &'static CompiledPattern,
}

impl RegexScanner {
    pub fn new(pattern: &'static CompiledPattern) -> Self {
        Self { pattern }
    }
}

impl EntityScanner for RegexScanner {
    fn kind(&self) -> EntityKind {
        self.pattern.kind
    }

    fn scan<'t>(&self, text: &'t str) -> Vec<RawMatch<'t>> {
        let regex = &self.pattern.regex;
        let found: Vec<RawMatch<'t>> = match self.pattern.group {
            Some(group) => regex
                .captures_iter(text)
                .filter_map(|caps| caps.name(group))
                .map(|m| RawMatch { start: m.start(), end: m.end(), text: m.as_str() })
                .collect(),
            None => regex
                .find_iter(text)
                .map(|m| RawMatch { start: m.start(), end: m.end(), text: m.as_str() })
                .collect(),
        };

        for m in &found {
            log_candidate_debug(module_path!(), self.kind(), m.text, m.start, m.end);
        }
        found
    }
}
