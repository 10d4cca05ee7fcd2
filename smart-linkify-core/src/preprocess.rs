//! preprocess.rs - Optional sanitization and the `before_linkify` hook.
//!
//! Sanitization escapes the whole text, then re-opens escaped tags whose name is
//! on the allow-list. This is a narrow textual allow-list, not an HTML parser:
//! nesting and attributes are not validated.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::config::LinkifyOptions;
use crate::errors::LinkifyError;
use crate::format::escape_html;
use crate::scanners::patterns::compile_pattern;

/// Result of pre-processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preprocessed {
    /// `before_linkify` vetoed the call; return this text untouched.
    Skip(String),
    /// Continue the pipeline on this working text.
    Continue(String),
}

/// HTML-escapes `text` and re-opens the escaped open/close tags named in `allowed_tags`.
pub fn sanitize_input(text: &str, allowed_tags: &[String]) -> Result<String, LinkifyError> {
    let mut out = escape_html(text).into_owned();

    for tag in allowed_tags.iter().filter(|t| !t.is_empty()) {
        let name = regex::escape(tag);
        let open = compile_pattern(&format!("allowed tag <{}>", tag), &format!(r"(?i)&lt;{}(?:&gt;|\s[^&]*&gt;)", name))?;
        let close = compile_pattern(&format!("allowed tag </{}>", tag), &format!(r"(?i)&lt;/{}&gt;", name))?;

        out = open
            .replace_all(&out, |caps: &regex::Captures<'_>| caps[0].replace("&lt;", "<").replace("&gt;", ">"))
            .into_owned();
        let closing = format!("</{}>", tag);
        out = close.replace_all(&out, regex::NoExpand(&closing)).into_owned();
    }
    Ok(out)
}

/// Runs sanitization (when enabled) and then the `before_linkify` hook.
pub fn preprocess(text: &str, options: &LinkifyOptions) -> Result<Preprocessed, LinkifyError> {
    let mut working = if LinkifyOptions::flag(options.sanitize_input) {
        let tags = options.allowed_tags.as_deref().unwrap_or_default();
        debug!("Sanitizing input ({} allowed tag(s)).", tags.len());
        sanitize_input(text, tags)?
    } else {
        text.to_string()
    };

    if let Some(hook) = &options.before_linkify {
        match hook.call(&working).map_err(|e| LinkifyError::hook("before_linkify", e))? {
            Some(rewritten) => working = rewritten,
            None => {
                debug!("before_linkify requested skip.");
                return Ok(Preprocessed::Skip(working));
            }
        }
    }
    Ok(Preprocessed::Continue(working))
}
