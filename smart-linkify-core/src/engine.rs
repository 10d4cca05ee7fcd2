// smart-linkify-core/src/engine.rs
//! The linkify orchestrator and its public entry points.
//!
//! `LinkifyEngine` runs the pipeline stages in order: input guard,
//! pre-processing, scanning, policy filters, overlap resolution, rendering,
//! assembly and the `after_linkify` hook. It borrows its options and holds no
//! other state, so one engine can serve any number of threads at once.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde_json::Value;
use std::borrow::Cow;

use crate::config::{LinkifyOptions, DEFAULT_TRUNCATE_MARKER};
use crate::errors::LinkifyError;
use crate::format::{format_phone, truncate, unescape_html};
use crate::guard::{check_input, require_text, GuardOutcome};
use crate::link_match::{
    log_rejection_debug, summarize_matches, AcceptedMatch, CandidateMatch, EntityKind, LinkifySummaryItem,
};
use crate::policy::{is_mention_allowed, normalize_phone, phone_href, resolve_email_href, resolve_url_href};
use crate::preprocess::{preprocess, Preprocessed};
use crate::render::render_link;
use crate::resolver::{assemble, resolve_overlaps};
use crate::scanners::{enabled_scanners, EntityScanner, RawMatch};

/// Working text after the guard and pre-processor.
enum Prepared {
    /// The pipeline stops here; return this text as the result.
    Finished(String),
    Ready(String),
}

/// Applies `LinkifyOptions` to text.
#[derive(Debug, Clone, Copy)]
pub struct LinkifyEngine<'o> {
    options: &'o LinkifyOptions,
}

impl<'o> LinkifyEngine<'o> {
    pub fn new(options: &'o LinkifyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LinkifyOptions {
        self.options
    }

    /// Rewrites every accepted entity in `text` into anchor markup.
    pub fn linkify(&self, text: &str) -> Result<String, LinkifyError> {
        let working = match self.prepare(text)? {
            Prepared::Finished(out) => return Ok(out),
            Prepared::Ready(working) => working,
        };

        let matches = self.resolve(&working)?;
        if matches.is_empty() {
            debug!("No entities accepted; returning pre-processed text.");
            return Ok(working);
        }

        let output = assemble(&working, &matches);
        debug!("Linkified {} match(es).", matches.len());

        match &self.options.after_linkify {
            Some(hook) => hook.call(&output).map_err(|e| LinkifyError::hook("after_linkify", e)),
            None => Ok(output),
        }
    }

    /// Returns the accepted, rendered matches in start order without assembling
    /// the output. Offsets refer to the pre-processed text.
    pub fn find_matches(&self, text: &str) -> Result<Vec<AcceptedMatch>, LinkifyError> {
        match self.prepare(text)? {
            Prepared::Finished(_) => Ok(Vec::new()),
            Prepared::Ready(working) => self.resolve(&working),
        }
    }

    /// Per-kind summary of what `linkify` would rewrite.
    pub fn summarize(&self, text: &str) -> Result<Vec<LinkifySummaryItem>, LinkifyError> {
        let matches = self.find_matches(text)?;
        Ok(summarize_matches(&matches))
    }

    fn prepare(&self, text: &str) -> Result<Prepared, LinkifyError> {
        if check_input(text, self.options)? == GuardOutcome::Passthrough {
            return Ok(Prepared::Finished(text.to_string()));
        }
        Ok(match preprocess(text, self.options)? {
            Preprocessed::Skip(out) => Prepared::Finished(out),
            Preprocessed::Continue(working) => Prepared::Ready(working),
        })
    }

    /// Scans, filters, resolves and renders. The result is sorted by start.
    fn resolve(&self, working: &str) -> Result<Vec<AcceptedMatch>, LinkifyError> {
        let sanitized = LinkifyOptions::flag(self.options.sanitize_input);
        let mut candidates = Vec::new();
        for scanner in enabled_scanners(self.options)? {
            for raw in scanner.scan(working) {
                // `&#039;` is the sanitizer's own output, not a hashtag.
                if sanitized && scanner.kind() == EntityKind::Hashtag && working[..raw.start].ends_with('&') {
                    continue;
                }
                if let Some(candidate) = self.candidate_from(scanner.kind(), raw)? {
                    candidates.push(candidate);
                }
            }
        }
        debug!("{} candidate(s) after policy filters.", candidates.len());

        let accepted = resolve_overlaps(candidates);
        let mut matches = Vec::with_capacity(accepted.len());
        for candidate in accepted {
            if candidate.kind == EntityKind::Url {
                if let Some(hook) = &self.options.on_url_detected {
                    hook.call(&candidate.href)
                        .map_err(|e| LinkifyError::hook("on_url_detected", e))?;
                }
            }
            let rendered_markup = render_link(&candidate, self.options)?;
            matches.push(AcceptedMatch { candidate, rendered_markup });
        }
        Ok(matches)
    }

    /// Applies the policy filters for `kind` to a raw match, producing the
    /// candidate with its href and display text, or `None` when rejected.
    ///
    /// Sanitized input is decoded first, so the renderer escapes each match once.
    fn candidate_from(&self, kind: EntityKind, raw: RawMatch<'_>) -> Result<Option<CandidateMatch>, LinkifyError> {
        let options = self.options;
        let decoded = if LinkifyOptions::flag(options.sanitize_input) {
            unescape_html(raw.text)
        } else {
            Cow::Borrowed(raw.text)
        };
        let text: &str = &decoded;

        let resolved = match kind {
            EntityKind::Url => resolve_url_href(text, options)?.map(|href| {
                let display = match options.max_length {
                    Some(max) if text.chars().count() > max => truncate(
                        text,
                        max,
                        options.truncate_strategy.unwrap_or_default(),
                        options.truncate_text.as_deref().unwrap_or(DEFAULT_TRUNCATE_MARKER),
                    ),
                    _ => text.to_string(),
                };
                (href, display)
            }),
            EntityKind::Email => resolve_email_href(text, options).map(|href| (href, text.to_string())),
            EntityKind::Phone => {
                let normalized = normalize_phone(text, options);
                let display = match options.phone_format.as_deref() {
                    Some(mask) => format_phone(&normalized, mask),
                    None => text.to_string(),
                };
                Some((phone_href(&normalized, options), display))
            }
            EntityKind::Hashtag => match &options.hashtag_url {
                Some(builder) => {
                    let tag = &text[1..];
                    let href = builder.build("tag", tag).map_err(|e| LinkifyError::hook("hashtag_url", e))?;
                    Some((href, text.to_string()))
                }
                None => None,
            },
            EntityKind::Mention => {
                let username = &text[1..];
                match &options.mention_url {
                    Some(builder) if is_mention_allowed(username, options) => {
                        let href = builder
                            .build("username", username)
                            .map_err(|e| LinkifyError::hook("mention_url", e))?;
                        Some((href, text.to_string()))
                    }
                    _ => None,
                }
            }
        };

        Ok(match resolved {
            Some((href, display)) => Some(CandidateMatch::new(raw.start, raw.end, raw.text, kind, href, display)),
            None => {
                log_rejection_debug(module_path!(), kind, text, "rejected by policy");
                None
            }
        })
    }
}

/// Linkifies `text` under `options`. The single entry point of the crate.
pub fn linkify(text: &str, options: &LinkifyOptions) -> Result<String, LinkifyError> {
    LinkifyEngine::new(options).linkify(text)
}

/// Linkifies a dynamically typed input. Anything but a JSON string fails with
/// [`LinkifyError::InvalidInputType`].
pub fn linkify_value(value: &Value, options: &LinkifyOptions) -> Result<String, LinkifyError> {
    let text = require_text(value)?;
    linkify(text, options)
}
