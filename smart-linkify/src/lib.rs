// smart-linkify/src/lib.rs
//! # smart-linkify CLI Application
//!
//! A thin command-line adapter over `smart-linkify-core`: it reads text, resolves
//! options from presets, option files and flags, and prints the linked markup or
//! a summary of what would be linked.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

#[cfg(any(test, feature = "test-exposed"))]
pub mod test_exposed {
    pub mod options {
        pub use crate::commands::options::*;
    }
}
