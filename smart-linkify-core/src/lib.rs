// smart-linkify-core/src/lib.rs
//! # Smart Linkify Core Library
//!
//! `smart-linkify-core` turns URLs, email addresses, phone numbers, hashtags and
//! mentions found in free-form text into styled, safe hyperlink markup. It is a
//! pure, synchronous transformation: every call is a function of its text and
//! its `LinkifyOptions`, and nothing persists between calls.
//!
//! ## Pipeline
//!
//! 1. `guard`: caps the input length and short-circuits blank input.
//! 2. `preprocess`: optional HTML escaping with an allow-list of tags, then the `before_linkify` hook.
//! 3. `scanners`: five independent, bounded patterns locate candidate entities.
//! 4. `policy`: domain, email-domain and mention allow/block lists, tracking removal, `transform_url`.
//! 5. `resolver`: priority-based overlap resolution and left-to-right assembly.
//! 6. `render`: anchor markup with styles, icons, accessibility attributes and truncation.
//! 7. `after_linkify` runs on the assembled result.
//!
//! ## Public API
//!
//! * [`linkify`]: the single entry point.
//! * [`linkify_value`]: the same for dynamically typed (JSON) input.
//! * [`LinkifyEngine`]: borrows options; also exposes [`LinkifyEngine::find_matches`] and [`LinkifyEngine::summarize`].
//! * [`LinkifyOptions`]: per-call configuration, loadable from YAML and mergeable with [`merge_options`].
//! * [`preset`] / [`load_preset_by_name`]: named configurations.
//! * [`dispatch_link_click`] / [`dispatch_link_hover`]: for UI bindings wiring events back to hooks.
//!
//! ## Usage Example
//!
//! ```rust
//! use smart_linkify_core::{linkify, merge_options, preset, LinkifyOptions};
//!
//! fn main() -> Result<(), smart_linkify_core::LinkifyError> {
//!     let html = linkify("Visit https://example.com", &LinkifyOptions::default())?;
//!     assert!(html.contains(r#"href="https://example.com""#));
//!
//!     let options = merge_options(
//!         preset("contact").unwrap_or_default(),
//!         Some(LinkifyOptions { phone_format: Some("(###) ###-####".into()), ..Default::default() }),
//!     );
//!     let html = linkify("Call 555.123.4567", &options)?;
//!     assert!(html.contains(r#"href="tel:5551234567""#));
//!     assert!(html.contains(">(555) 123-4567</a>"));
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Linkify calls return [`LinkifyError`]. Oversized input, non-textual input and
//! failing caller hooks are reported; malformed URLs are not errors and simply
//! pass through. File-level operations (options and preset loading) use `anyhow`.
//!
//! ---
//! License: MIT OR APACHE 2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod events;
pub mod format;
pub mod guard;
pub mod link_match;
pub mod policy;
pub mod preprocess;
pub mod presets;
pub mod render;
pub mod resolver;
pub mod scanners;

/// Re-exports the configuration types and hook wrappers.
pub use config::{
    merge_options,
    AriaLabel,
    DomainStyle,
    DomainStyleRule,
    Hook,
    LinkTarget,
    LinkifyOptions,
    TruncateStrategy,
    UrlBuilder,
    DEFAULT_MAX_INPUT_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::LinkifyError;

/// Re-exports the entry points and the engine.
pub use engine::{linkify, linkify_value, LinkifyEngine};

/// Re-exports match and summary types.
pub use link_match::{AcceptedMatch, CandidateMatch, EntityKind, LinkifySummaryItem};

pub use events::{dispatch_link_click, dispatch_link_hover};

pub use presets::{all_presets, load_preset_by_name, preset, preset_candidate_paths, preset_names, PRESETS};

pub use scanners::EntityScanner;
