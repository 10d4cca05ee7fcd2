//! errors.rs - Custom error types for the smart-linkify-core library.
//!
//! Every failure of a `linkify` call is one of these variants. Nothing is
//! returned partially: a call either produces the full markup or an error.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `smart-linkify-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum LinkifyError {
    /// The input was not textual. Only reachable through the dynamically typed
    /// entry point (`linkify_value`); `&str` input is textual by construction.
    #[error("Expected text to be a string, but received {0}")]
    InvalidInputType(String),

    #[error(
        "Input text exceeds maximum length of {limit} characters (received {actual}). \
         This protects against ReDoS attacks. Configure a higher limit via the \
         `max_input_length` option if needed."
    )]
    InputTooLong { limit: usize, actual: usize },

    #[error("Failed to compile pattern '{name}': {source}")]
    PatternCompilation {
        name: String,
        #[source]
        source: regex::Error,
    },

    /// A caller-supplied hook failed. Hooks are caller-owned code, so the
    /// failure is handed back untouched.
    #[error("Hook '{hook}' failed: {source}")]
    Hook {
        hook: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl LinkifyError {
    pub(crate) fn hook(hook: &'static str, source: anyhow::Error) -> Self {
        LinkifyError::Hook { hook, source }
    }
}
