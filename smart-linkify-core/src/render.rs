//! render.rs - Builds the anchor markup for one accepted match.
//!
//! The markup has the shape
//! `{prefix}{icon}<a href=".." target=".." ...>{display}</a>{icon_after}{screen reader text}`.
//! Every value that can come from the input text (the href and the display
//! text) is escaped here, as are the attribute values coming from options.
//! Icons and prefixes are caller-controlled markup and are inserted as-is.
//!
//! License: MIT OR APACHE 2.0

use crate::config::{AriaLabel, DomainStyle, LinkTarget, LinkifyOptions, DEFAULT_COLOR, DEFAULT_REL};
use crate::errors::LinkifyError;
use crate::format::{css_property_name, escape_html};
use crate::link_match::{CandidateMatch, EntityKind};
use crate::policy::extract_hostname;

/// Emails and phones open the system handler, so they stay in the current context.
fn effective_target(kind: EntityKind, options: &LinkifyOptions) -> LinkTarget {
    match kind {
        EntityKind::Email | EntityKind::Phone => LinkTarget::SelfContext,
        _ => options.target(),
    }
}

fn link_color<'a>(kind: EntityKind, options: &'a LinkifyOptions, domain_style: Option<&'a DomainStyle>) -> &'a str {
    let kind_color = match kind {
        EntityKind::Hashtag => options.hashtag_color.as_deref(),
        EntityKind::Mention => options.mention_color.as_deref(),
        _ => None,
    };
    kind_color
        .or_else(|| domain_style.and_then(|s| s.color.as_deref()))
        .or(options.color.as_deref())
        .unwrap_or(DEFAULT_COLOR)
}

/// The `;`-joined inline style declarations.
pub fn style_declarations(kind: EntityKind, options: &LinkifyOptions, domain_style: Option<&DomainStyle>) -> String {
    let mut styles = vec![format!("color:{}", link_color(kind, options, domain_style))];

    let underline = options.underline != Some(false) && domain_style.and_then(|s| s.underline) != Some(false);
    styles.push(format!("text-decoration:{}", if underline { "underline" } else { "none" }));

    if LinkifyOptions::flag(options.bold) || domain_style.is_some_and(|s| LinkifyOptions::flag(s.bold)) {
        styles.push("font-weight:bold".to_string());
    }
    if LinkifyOptions::flag(options.italic) || domain_style.is_some_and(|s| LinkifyOptions::flag(s.italic)) {
        styles.push("font-style:italic".to_string());
    }
    if let Some(custom) = &options.custom_styles {
        styles.extend(custom.iter().map(|(k, v)| format!("{}:{}", css_property_name(k), v)));
    }
    styles.join(";")
}

fn class_list(options: &LinkifyOptions, domain_style: Option<&DomainStyle>) -> String {
    [
        options.class_name.as_deref(),
        domain_style.and_then(|s| s.class_name.as_deref()),
        options.icon_class.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|c| !c.is_empty())
    .collect::<Vec<_>>()
    .join(" ")
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_html(value));
    out.push('"');
}

/// Renders `candidate` as anchor markup under `options`.
///
/// Fails only when a computed `aria_label` hook fails.
pub fn render_link(candidate: &CandidateMatch, options: &LinkifyOptions) -> Result<String, LinkifyError> {
    let kind = candidate.kind;
    let href = candidate.href.as_str();
    let hostname = extract_hostname(href);
    let domain_style = options.domain_style_for(&hostname);

    let mut icon_before = domain_style
        .and_then(|s| s.icon.as_deref())
        .or(options.icon_before.as_deref())
        .unwrap_or("")
        .to_string();
    let kind_prefix = match kind {
        EntityKind::Hashtag => options.hashtag_prefix.as_deref(),
        EntityKind::Mention => options.mention_prefix.as_deref(),
        _ => None,
    };
    if let Some(prefix) = kind_prefix {
        icon_before.insert_str(0, prefix);
    }

    let mut out = String::with_capacity(href.len() * 2 + candidate.display_text.len() + 96);
    out.push_str(&icon_before);
    out.push_str("<a");
    push_attr(&mut out, "href", href);

    let target = effective_target(kind, options);
    push_attr(&mut out, "target", target.as_attr());

    let rel = match options.rel.as_deref().filter(|r| !r.is_empty()) {
        Some(explicit) => Some(explicit),
        None if target == LinkTarget::Blank => Some(DEFAULT_REL),
        None => None,
    };
    if let Some(rel) = rel {
        push_attr(&mut out, "rel", rel);
    }

    let classes = class_list(options, domain_style);
    if !classes.is_empty() {
        push_attr(&mut out, "class", &classes);
    }

    let aria = match &options.aria_label {
        Some(AriaLabel::Text(text)) => Some(text.clone()),
        Some(AriaLabel::Computed(hook)) => Some(hook.call(href).map_err(|e| LinkifyError::hook("aria_label", e))?),
        None => None,
    };
    if let Some(aria) = aria.filter(|a| !a.is_empty()) {
        push_attr(&mut out, "aria-label", &aria);
    }

    if let Some(role) = options.role.as_deref().filter(|r| !r.is_empty()) {
        push_attr(&mut out, "role", role);
    }
    if let Some(tab_index) = options.tab_index {
        push_attr(&mut out, "tabindex", &tab_index.to_string());
    }
    if LinkifyOptions::flag(options.show_tooltip) || LinkifyOptions::flag(options.show_full_on_hover) {
        push_attr(&mut out, "title", href);
    }
    push_attr(&mut out, "style", &style_declarations(kind, options, domain_style));

    out.push('>');
    out.push_str(&escape_html(&candidate.display_text));
    out.push_str("</a>");

    if let Some(icon_after) = options.icon_after.as_deref() {
        out.push_str(icon_after);
    }
    if let Some(sr) = options.screen_reader_text.as_deref().filter(|s| !s.is_empty()) {
        out.push_str("<span class=\"sr-only\">");
        out.push_str(&escape_html(sr));
        out.push_str("</span>");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn url_candidate(href: &str, display: &str) -> CandidateMatch {
        CandidateMatch::new(0, display.len(), display, EntityKind::Url, href.to_string(), display.to_string())
    }

    #[test]
    fn test_default_url_markup() {
        let html = render_link(&url_candidate("https://example.com", "https://example.com"), &LinkifyOptions::default()).unwrap();
        assert_eq!(
            html,
            r#"<a href="https://example.com" target="_blank" rel="noopener noreferrer" style="color:inherit;text-decoration:underline">https://example.com</a>"#
        );
    }

    #[test]
    fn test_self_target_omits_rel_unless_explicit() {
        let options = LinkifyOptions { target: Some(LinkTarget::SelfContext), ..Default::default() };
        let html = render_link(&url_candidate("https://a.io", "a.io"), &options).unwrap();
        assert!(html.contains(r#"target="_self""#));
        assert!(!html.contains("rel="));

        let options = LinkifyOptions { rel: Some("nofollow".into()), ..options };
        let html = render_link(&url_candidate("https://a.io", "a.io"), &options).unwrap();
        assert!(html.contains(r#"rel="nofollow""#));
    }

    #[test]
    fn test_email_forces_self_target() {
        let candidate = CandidateMatch::new(0, 5, "a@b.io", EntityKind::Email, "mailto:a@b.io".into(), "a@b.io".into());
        let html = render_link(&candidate, &LinkifyOptions::default()).unwrap();
        assert!(html.contains(r#"target="_self""#));
        assert!(!html.contains("rel="));
    }

    #[test]
    fn test_color_precedence() {
        let options = LinkifyOptions {
            color: Some("blue".into()),
            hashtag_color: Some("green".into()),
            ..Default::default()
        }
        .with_domain_style("example.com", DomainStyle { color: Some("red".into()), ..Default::default() });

        assert_eq!(link_color(EntityKind::Hashtag, &options, options.domain_style_for("example.com")), "green");
        assert_eq!(link_color(EntityKind::Url, &options, options.domain_style_for("example.com")), "red");
        assert_eq!(link_color(EntityKind::Url, &options, None), "blue");
        assert_eq!(link_color(EntityKind::Url, &LinkifyOptions::default(), None), "inherit");
    }

    #[test]
    fn test_style_declarations_with_domain_and_custom_styles() {
        let mut custom = BTreeMap::new();
        custom.insert("fontSize".to_string(), "14px".to_string());
        let options = LinkifyOptions { italic: Some(true), custom_styles: Some(custom), ..Default::default() };
        let domain = DomainStyle { bold: Some(true), underline: Some(false), ..Default::default() };
        assert_eq!(
            style_declarations(EntityKind::Url, &options, Some(&domain)),
            "color:inherit;text-decoration:none;font-weight:bold;font-style:italic;font-size:14px"
        );
    }

    #[test]
    fn test_accessibility_and_icons() {
        let options = LinkifyOptions {
            class_name: Some("link".into()),
            icon_class: Some("with-icon".into()),
            icon_before: Some("-> ".into()),
            icon_after: Some(" <-".into()),
            role: Some("link".into()),
            tab_index: Some(0),
            screen_reader_text: Some("Opens in new window".into()),
            show_tooltip: Some(true),
            ..Default::default()
        }
        .with_aria_label_fn(|href| format!("Visit {}", href));
        let html = render_link(&url_candidate("https://a.io/?x=\"1\"", "a.io"), &options).unwrap();

        assert!(html.starts_with("-> <a "));
        assert!(html.contains(r#"class="link with-icon""#));
        assert!(html.contains(r#"aria-label="Visit https://a.io/?x=&quot;1&quot;""#));
        assert!(html.contains(r#"role="link""#));
        assert!(html.contains(r#"tabindex="0""#));
        assert!(html.contains(r#"title="https://a.io/?x=&quot;1&quot;""#));
        assert!(html.ends_with(r#"</a> <-<span class="sr-only">Opens in new window</span>"#));
    }

    #[test]
    fn test_hashtag_prefix_precedes_icon() {
        let options = LinkifyOptions {
            hashtag_prefix: Some("[tag]".into()),
            icon_before: Some("*".into()),
            ..Default::default()
        };
        let candidate = CandidateMatch::new(0, 5, "#rust", EntityKind::Hashtag, "/t/rust".into(), "#rust".into());
        let html = render_link(&candidate, &options).unwrap();
        assert!(html.starts_with("[tag]*<a "));
    }

    #[test]
    fn test_display_text_is_escaped() {
        let html = render_link(&url_candidate("https://a.io/<x>", "a.io/<x>"), &LinkifyOptions::default()).unwrap();
        assert!(html.contains(">a.io/&lt;x&gt;</a>"));
        assert!(html.contains(r#"href="https://a.io/&lt;x&gt;""#));
    }
}
