//! guard.rs - The input guard, the first stage of every `linkify` call.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use serde_json::Value;

use crate::config::LinkifyOptions;
use crate::errors::LinkifyError;

/// What the rest of the pipeline should do with a guarded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Empty or whitespace-only text: return it unchanged without scanning.
    Passthrough,
    /// Run the full pipeline.
    Scan,
}

/// Caps the input length (in characters) and detects the blank fast path.
///
/// The cap keeps the cost of scanning bounded for adversarial input; the
/// error names both the limit and the option that raises it.
pub fn check_input(text: &str, options: &LinkifyOptions) -> Result<GuardOutcome, LinkifyError> {
    let limit = options.max_input_length();
    // Byte length is an upper bound on char count, so the count is only taken when it can matter.
    if text.len() > limit {
        let actual = text.chars().count();
        if actual > limit {
            debug!("Input rejected: {} characters exceeds limit of {}.", actual, limit);
            return Err(LinkifyError::InputTooLong { limit, actual });
        }
    }

    if text.trim().is_empty() {
        debug!("Blank input, skipping linkification.");
        return Ok(GuardOutcome::Passthrough);
    }
    Ok(GuardOutcome::Scan)
}

/// Name of a JSON value's type, as reported in `InvalidInputType`.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Extracts the text from a dynamically typed input, rejecting anything that
/// is not a string.
pub fn require_text(value: &Value) -> Result<&str, LinkifyError> {
    value
        .as_str()
        .ok_or_else(|| LinkifyError::InvalidInputType(json_type_name(value).to_string()))
}
