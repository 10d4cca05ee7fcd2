//! Text formatting helpers shared by the pre-processor and the renderer.
//!
//! All length arithmetic here counts `char`s, never bytes, so slicing can not
//! split a multi-byte character.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use crate::config::TruncateStrategy;
use crate::policy::extract_hostname;

/// Escapes the five HTML-significant characters `& < > " '`.
///
/// Returns the input unchanged (borrowed) when there is nothing to escape.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Reverses [`escape_html`]: decodes the five entities it produces, each once.
/// Any other `&` sequence is left as it is.
pub fn unescape_html(text: &str) -> Cow<'_, str> {
    const ENTITIES: [(&str, char); 5] = [("&amp;", '&'), ("&lt;", '<'), ("&gt;", '>'), ("&quot;", '"'), ("&#039;", '\'')];

    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        match ENTITIES.iter().find(|(entity, _)| rest.starts_with(*entity)) {
            Some((entity, c)) => {
                out.push(*c);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

fn head(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn tail(text: &str, n: usize) -> &str {
    if n == 0 {
        return "";
    }
    match text.char_indices().rev().nth(n - 1) {
        Some((idx, _)) => &text[idx..],
        None => text,
    }
}

/// Shortens `text` to roughly `max_length` characters using `strategy`.
///
/// Text that already fits is returned as-is. The marker counts towards the
/// budget; when the budget is smaller than the marker only the marker remains.
pub fn truncate(text: &str, max_length: usize, strategy: TruncateStrategy, marker: &str) -> String {
    let len = text.chars().count();
    if len <= max_length {
        return text.to_string();
    }
    let budget = max_length.saturating_sub(marker.chars().count());

    match strategy {
        TruncateStrategy::Middle => {
            let part = budget / 2;
            format!("{}{}{}", head(text, part), marker, tail(text, part))
        }
        TruncateStrategy::Smart => {
            let domain = extract_hostname(text);
            if !domain.is_empty() && domain.chars().count() < budget {
                format!("{}{}", domain, marker)
            } else {
                format!("{}{}", head(text, budget), marker)
            }
        }
        TruncateStrategy::End => format!("{}{}", head(text, budget), marker),
    }
}

/// Lays the digits of `phone` into `mask`, where `#` is a digit placeholder.
///
/// Literal mask characters are copied through while digits remain; digits left
/// over once the mask is exhausted are appended raw. Non-digits in `phone`
/// (including a leading `+`) are dropped.
pub fn format_phone(phone: &str, mask: &str) -> String {
    let mut digits = phone.chars().filter(|c| c.is_ascii_digit()).peekable();
    let mut out = String::with_capacity(mask.len() + 4);

    for m in mask.chars() {
        if digits.peek().is_none() {
            break;
        }
        if m == '#' {
            if let Some(d) = digits.next() {
                out.push(d);
            }
        } else {
            out.push(m);
        }
    }
    out.extend(digits);
    out
}

/// Converts a camelCase style key to its hyphenated CSS form (`fontSize` -> `font-size`).
pub fn css_property_name(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}
