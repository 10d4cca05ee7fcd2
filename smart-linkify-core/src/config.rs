//! Configuration management for `smart-linkify-core`.
//!
//! This module defines `LinkifyOptions`, the immutable per-call configuration, along
//! with the hook types used for caller-supplied behaviour. Every field is optional:
//! an absent field means "use the default". Options can be loaded from YAML,
//! merged (preset first, overrides second) and validated.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tinytemplate::TinyTemplate;

/// Default cap on input length, in characters.
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 50_000;
/// Default marker appended by truncation.
pub const DEFAULT_TRUNCATE_MARKER: &str = "...";
/// `rel` value used for links that open in a new browsing context.
pub const DEFAULT_REL: &str = "noopener noreferrer";
pub const DEFAULT_EMAIL_PREFIX: &str = "mailto:";
pub const DEFAULT_PHONE_PREFIX: &str = "tel:";
/// Color used when nothing more specific is configured.
pub const DEFAULT_COLOR: &str = "inherit";

type HookFn<R> = dyn Fn(&str) -> anyhow::Result<R> + Send + Sync;

/// A caller-supplied callable with the shape `(input) -> output`.
///
/// Hooks run synchronously inside the `linkify` call. A failing hook aborts the
/// call and its error is returned to the caller.
pub struct Hook<R = String> {
    inner: Arc<HookFn<R>>,
}

impl<R: 'static> Hook<R> {
    /// Wraps an infallible closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&str) -> R + Send + Sync + 'static,
    {
        Self { inner: Arc::new(move |input: &str| Ok(f(input))) }
    }

    /// Wraps a closure that may fail.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<R> + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    pub fn call(&self, input: &str) -> anyhow::Result<R> {
        (self.inner)(input)
    }
}

impl<R> Clone for Hook<R> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<R> fmt::Debug for Hook<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hook(..)")
    }
}

/// Where a followed link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkTarget {
    /// A new browsing context (`_blank`).
    #[default]
    #[serde(rename = "_blank", alias = "blank")]
    Blank,
    /// The current browsing context (`_self`).
    #[serde(rename = "_self", alias = "self")]
    SelfContext,
}

impl LinkTarget {
    pub fn as_attr(&self) -> &'static str {
        match self {
            LinkTarget::Blank => "_blank",
            LinkTarget::SelfContext => "_self",
        }
    }
}

/// How an over-long display text is shortened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TruncateStrategy {
    /// Keep the head and append the marker.
    #[default]
    End,
    /// Keep the head and the tail with the marker in between.
    Middle,
    /// Show just the domain plus the marker when it fits, else behave like `End`.
    Smart,
}

/// The `aria-label` of a link: either literal text or computed from the href.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AriaLabel {
    Text(String),
    #[serde(skip)]
    Computed(Hook<String>),
}

/// Builds the href of a hashtag or mention from its bare value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UrlBuilder {
    /// A TinyTemplate string, e.g. `https://twitter.com/hashtag/{tag}`.
    /// `{value}` is always available; hashtags also get `{tag}` and mentions `{username}`.
    Template(String),
    #[serde(skip)]
    Custom(Hook<String>),
}

impl UrlBuilder {
    /// Produces the href for `value`, exposing it to templates under both
    /// `value` and `key`.
    pub fn build(&self, key: &str, value: &str) -> anyhow::Result<String> {
        match self {
            UrlBuilder::Custom(hook) => hook.call(value),
            UrlBuilder::Template(template) => {
                let mut tt = TinyTemplate::new();
                tt.set_default_formatter(&tinytemplate::format_unescaped);
                tt.add_template("href", template)
                    .context("Failed to parse URL template")?;
                let mut ctx = serde_json::Map::new();
                ctx.insert("value".to_string(), serde_json::Value::from(value));
                ctx.insert(key.to_string(), serde_json::Value::from(value));
                tt.render("href", &serde_json::Value::Object(ctx))
                    .map_err(|e| anyhow!("Failed to render URL template '{}': {}", template, e))
            }
        }
    }
}

/// Per-hostname visual override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainStyle {
    pub color: Option<String>,
    pub icon: Option<String>,
    pub class_name: Option<String>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
}

/// A `DomainStyle` keyed by a hostname pattern (exact or substring match).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainStyleRule {
    pub domain: String,
    #[serde(flatten)]
    pub style: DomainStyle,
}

/// The full per-call configuration.
///
/// Construct it with struct-update syntax over `Default::default()`, load it from
/// YAML, or start from a preset (see [`crate::presets`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct LinkifyOptions {
    // Base link styling and navigation
    pub color: Option<String>,
    pub target: Option<LinkTarget>,
    pub class_name: Option<String>,
    pub underline: Option<bool>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub rel: Option<String>,

    // Display-length control
    pub max_length: Option<usize>,
    pub truncate_strategy: Option<TruncateStrategy>,
    pub truncate_text: Option<String>,
    pub show_tooltip: Option<bool>,
    pub show_full_on_hover: Option<bool>,

    // Emails
    pub detect_emails: Option<bool>,
    pub email_prefix: Option<String>,
    pub email_subject: Option<String>,
    pub email_body: Option<String>,
    pub email_domain_allowlist: Option<Vec<String>>,

    // Phones
    pub detect_phones: Option<bool>,
    pub phone_prefix: Option<String>,
    /// Digit mask using `#` as the placeholder, e.g. `(###) ###-####`.
    pub phone_format: Option<String>,
    pub phone_country_code: Option<String>,

    // Hashtags
    pub detect_hashtags: Option<bool>,
    pub hashtag_url: Option<UrlBuilder>,
    pub hashtag_prefix: Option<String>,
    pub hashtag_color: Option<String>,

    // Mentions
    pub detect_mentions: Option<bool>,
    pub mention_url: Option<UrlBuilder>,
    pub mention_prefix: Option<String>,
    pub mention_color: Option<String>,
    pub mention_allowlist: Option<Vec<String>>,

    // Safety
    pub blocklist: Option<Vec<String>>,
    pub allowlist: Option<Vec<String>>,
    pub remove_tracking: Option<bool>,
    pub sanitize_input: Option<bool>,
    pub allowed_tags: Option<Vec<String>>,

    // Presentation
    pub icon_before: Option<String>,
    pub icon_after: Option<String>,
    pub icon_class: Option<String>,
    pub domain_styles: Option<Vec<DomainStyleRule>>,
    pub custom_styles: Option<BTreeMap<String, String>>,

    // Accessibility
    pub aria_label: Option<AriaLabel>,
    pub screen_reader_text: Option<String>,
    pub tab_index: Option<i32>,
    pub role: Option<String>,

    // Observation hooks
    pub track_clicks: Option<bool>,
    #[serde(skip)]
    pub on_click: Option<Hook<()>>,
    #[serde(skip)]
    pub on_url_detected: Option<Hook<()>>,
    #[serde(skip)]
    pub on_link_click: Option<Hook<()>>,
    #[serde(skip)]
    pub on_link_hover: Option<Hook<()>>,

    // Rewriting hooks
    #[serde(skip)]
    pub transform_url: Option<Hook<String>>,
    /// Returning `None` skips linkification for the whole call.
    #[serde(skip)]
    pub before_linkify: Option<Hook<Option<String>>>,
    #[serde(skip)]
    pub after_linkify: Option<Hook<String>>,

    /// Anti-abuse cap on input length, in characters.
    pub max_input_length: Option<usize>,
}

impl LinkifyOptions {
    /// Loads options from a YAML file and validates them.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading linkify options from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read options file {}", path.display()))?;
        let options = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to parse options file {}", path.display()))?;
        info!("Loaded linkify options from file {}.", path.display());
        Ok(options)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let options: LinkifyOptions = serde_yml::from_str(yaml)
            .context("Invalid linkify options YAML")?;
        options.validate()?;
        Ok(options)
    }

    /// Serializes the data-only part of the options. Fails if a hook-backed
    /// `aria_label` or URL builder is set, as those have no textual form.
    /// Unset fields are omitted.
    pub fn to_yaml_string(&self) -> Result<String> {
        let mut value = serde_json::to_value(self).context("Failed to serialize linkify options")?;
        if let serde_json::Value::Object(map) = &mut value {
            map.retain(|_, v| !v.is_null());
        }
        serde_yml::to_string(&value).context("Failed to serialize linkify options")
    }

    /// Checks option values that would make rendering meaningless.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if self.max_length == Some(0) {
            errors.push("`max_length` must be greater than 0.".to_string());
        }
        if self.max_input_length == Some(0) {
            errors.push("`max_input_length` must be greater than 0.".to_string());
        }
        if let Some(rules) = &self.domain_styles {
            for (idx, rule) in rules.iter().enumerate() {
                if rule.domain.trim().is_empty() {
                    errors.push(format!("Domain style #{} has an empty `domain`.", idx + 1));
                }
            }
        }
        if let Some(tags) = &self.allowed_tags {
            for tag in tags {
                if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric()) {
                    errors.push(format!("Allowed tag '{}' is not a plain tag name.", tag));
                }
            }
        }
        if let (Some(max), Some(marker)) = (self.max_length, self.truncate_text.as_deref()) {
            if marker.chars().count() >= max {
                warn!(
                    "Truncation marker '{}' is not shorter than max_length {}; truncated links will show only the marker.",
                    marker, max
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Options validation failed:\n{}", errors.join("\n")))
        }
    }

    pub(crate) fn flag(value: Option<bool>) -> bool {
        value.unwrap_or(false)
    }

    pub fn max_input_length(&self) -> usize {
        self.max_input_length.unwrap_or(DEFAULT_MAX_INPUT_LENGTH)
    }

    pub fn target(&self) -> LinkTarget {
        self.target.unwrap_or_default()
    }

    /// Finds the style for `hostname`: an exact domain match wins, otherwise the
    /// first rule whose domain is contained in the hostname.
    pub fn domain_style_for(&self, hostname: &str) -> Option<&DomainStyle> {
        if hostname.is_empty() {
            return None;
        }
        let rules = self.domain_styles.as_ref()?;
        rules
            .iter()
            .find(|r| r.domain == hostname)
            .or_else(|| {
                rules
                    .iter()
                    .find(|r| !r.domain.is_empty() && hostname.contains(r.domain.as_str()))
            })
            .map(|r| &r.style)
    }

    // ---------- Convenience builder methods for hook-backed fields ----------

    pub fn with_hashtag_url<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.detect_hashtags = Some(true);
        self.hashtag_url = Some(UrlBuilder::Custom(Hook::new(f)));
        self
    }

    pub fn with_mention_url<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.detect_mentions = Some(true);
        self.mention_url = Some(UrlBuilder::Custom(Hook::new(f)));
        self
    }

    pub fn with_aria_label_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.aria_label = Some(AriaLabel::Computed(Hook::new(f)));
        self
    }

    pub fn with_transform_url<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.transform_url = Some(Hook::new(f));
        self
    }

    pub fn with_before_linkify<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Option<String> + Send + Sync + 'static,
    {
        self.before_linkify = Some(Hook::new(f));
        self
    }

    pub fn with_after_linkify<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.after_linkify = Some(Hook::new(f));
        self
    }

    pub fn with_on_url_detected<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_url_detected = Some(Hook::new(f));
        self
    }

    pub fn with_domain_style(mut self, domain: &str, style: DomainStyle) -> Self {
        self.domain_styles
            .get_or_insert_with(Vec::new)
            .push(DomainStyleRule { domain: domain.to_string(), style });
        self
    }
}

/// Merges `overrides` on top of `base`: every field set in `overrides` wins.
///
/// This is how a preset is combined with caller-specific settings.
pub fn merge_options(base: LinkifyOptions, overrides: Option<LinkifyOptions>) -> LinkifyOptions {
    let Some(over) = overrides else {
        debug!("merge_options called without overrides; using base options as-is.");
        return base;
    };

    macro_rules! pick {
        ($($field:ident),* $(,)?) => {
            LinkifyOptions { $($field: over.$field.or(base.$field),)* }
        };
    }

    let merged = pick!(
        color, target, class_name, underline, bold, italic, rel,
        max_length, truncate_strategy, truncate_text, show_tooltip, show_full_on_hover,
        detect_emails, email_prefix, email_subject, email_body, email_domain_allowlist,
        detect_phones, phone_prefix, phone_format, phone_country_code,
        detect_hashtags, hashtag_url, hashtag_prefix, hashtag_color,
        detect_mentions, mention_url, mention_prefix, mention_color, mention_allowlist,
        blocklist, allowlist, remove_tracking, sanitize_input, allowed_tags,
        icon_before, icon_after, icon_class, domain_styles, custom_styles,
        aria_label, screen_reader_text, tab_index, role,
        track_clicks, on_click, on_url_detected, on_link_click, on_link_hover,
        transform_url, before_linkify, after_linkify,
        max_input_length,
    );
    debug!("Merged linkify options with overrides.");
    merged
}
