//! Policy filters applied to each raw match before it becomes a candidate link.
//!
//! This is where the caller's safety settings take effect: domain allow and
//! block lists, the email-domain and mention allowlists, tracking-parameter
//! removal, and the `transform_url` hook. Malformed URLs never surface as
//! errors here; they resolve to an empty hostname and pass through untouched.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use url::Url;

use crate::config::{LinkifyOptions, DEFAULT_EMAIL_PREFIX, DEFAULT_PHONE_PREFIX};
use crate::errors::LinkifyError;

/// Query parameters removed when `remove_tracking` is on.
pub const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "fbclid",
    "gclid",
    "msclkid",
    "mc_cid",
    "mc_eid",
];

fn has_web_scheme(url: &str) -> bool {
    let lower = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Returns `url` with an `https://` scheme prepended when it has no web scheme.
pub fn with_default_scheme(url: &str) -> String {
    if has_web_scheme(url) {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Extracts the hostname of `url`, assuming `https://` when no scheme is present.
/// Returns an empty string when the URL can not be parsed.
pub fn extract_hostname(url: &str) -> String {
    Url::parse(&with_default_scheme(url))
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

/// Applies the block list, then the allow list. A hostname present in both is
/// always rejected.
pub fn is_domain_allowed(hostname: &str, options: &LinkifyOptions) -> bool {
    if let Some(blocked) = &options.blocklist {
        if blocked.iter().any(|b| hostname.contains(b.as_str())) {
            return false;
        }
    }
    if let Some(allowed) = &options.allowlist {
        if !allowed.iter().any(|a| hostname.contains(a.as_str())) {
            return false;
        }
    }
    true
}

/// Checks the portion after `@` against `email_domain_allowlist` (exact match).
pub fn is_email_domain_allowed(email: &str, options: &LinkifyOptions) -> bool {
    match &options.email_domain_allowlist {
        Some(list) if !list.is_empty() => {
            let domain = email.split_once('@').map(|(_, d)| d).unwrap_or("");
            !domain.is_empty() && list.iter().any(|d| d == domain)
        }
        _ => true,
    }
}

/// Checks a username (without the `@`) against `mention_allowlist` (exact match).
pub fn is_mention_allowed(username: &str, options: &LinkifyOptions) -> bool {
    match &options.mention_allowlist {
        Some(list) if !list.is_empty() => list.iter().any(|u| u == username),
        _ => true,
    }
}

/// Removes the known tracking parameters from `url`.
///
/// The URL is re-serialized in normalized form (e.g. an empty path becomes `/`).
/// Unparseable input is returned unchanged.
pub fn strip_tracking_params(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        debug!("strip_tracking_params: unparseable href left unchanged.");
        return url.to_string();
    };

    if parsed.query().is_some() {
        let kept: Vec<(String, String)> = parsed
            .query_pairs()
            .filter(|(k, _)| !TRACKING_PARAMS.contains(&k.as_ref()))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        if kept.is_empty() {
            parsed.set_query(None);
        } else {
            parsed.query_pairs_mut().clear().extend_pairs(kept);
        }
    }
    parsed.to_string()
}

/// Resolves the href of a URL match, or `None` when the domain policy rejects it.
///
/// Order: default scheme, domain filters, `transform_url`, tracking removal.
pub fn resolve_url_href(raw: &str, options: &LinkifyOptions) -> Result<Option<String>, LinkifyError> {
    let mut href = with_default_scheme(raw);

    let hostname = extract_hostname(&href);
    if !is_domain_allowed(&hostname, options) {
        debug!("URL rejected by domain policy (host '{}').", hostname);
        return Ok(None);
    }

    if let Some(hook) = &options.transform_url {
        href = hook
            .call(&href)
            .map_err(|e| LinkifyError::hook("transform_url", e))?;
    }

    if LinkifyOptions::flag(options.remove_tracking) {
        href = strip_tracking_params(&href);
    }

    Ok(Some(href))
}

/// Builds the `mailto:` href of an email match, or `None` when the email-domain
/// allowlist rejects it.
pub fn resolve_email_href(email: &str, options: &LinkifyOptions) -> Option<String> {
    if !is_email_domain_allowed(email, options) {
        debug!("Email rejected by email_domain_allowlist.");
        return None;
    }

    let prefix = options.email_prefix.as_deref().unwrap_or(DEFAULT_EMAIL_PREFIX);
    let mut href = format!("{}{}", prefix, email);

    let mut params = Vec::new();
    if let Some(subject) = options.email_subject.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("subject={}", urlencoding::encode(subject)));
    }
    if let Some(body) = options.email_body.as_deref().filter(|s| !s.is_empty()) {
        params.push(format!("body={}", urlencoding::encode(body)));
    }
    if !params.is_empty() {
        href.push('?');
        href.push_str(&params.join("&"));
    }
    Some(href)
}

/// Strips phone separators and applies `phone_country_code` to numbers that are
/// not already `+`-prefixed.
pub fn normalize_phone(phone: &str, options: &LinkifyOptions) -> String {
    let mut clean: String = phone
        .chars()
        .filter(|c| !(c.is_whitespace() || matches!(c, '-' | '.' | '(' | ')')))
        .collect();
    if let Some(code) = options.phone_country_code.as_deref().filter(|c| !c.is_empty()) {
        if !clean.starts_with('+') {
            clean.insert_str(0, code);
        }
    }
    clean
}

/// Builds the `tel:` href for a normalized phone number.
pub fn phone_href(normalized: &str, options: &LinkifyOptions) -> String {
    let prefix = options.phone_prefix.as_deref().unwrap_or(DEFAULT_PHONE_PREFIX);
    format!("{}{}", prefix, normalized)
}
