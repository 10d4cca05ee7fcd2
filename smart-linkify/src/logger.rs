// smart-linkify/src/logger.rs
//! Logger initialisation for the CLI.
//!
//! Logs go to stderr so that stdout carries only the generated markup.
//! License: MIT OR APACHE 2.0

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Initialises `env_logger`. An explicit level overrides `RUST_LOG`; otherwise
/// `RUST_LOG` is honoured with a default of `warn`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    let _ = builder.target(Target::Stderr).format_timestamp(None).try_init();
}
