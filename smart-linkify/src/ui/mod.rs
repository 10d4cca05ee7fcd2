// smart-linkify/src/ui/mod.rs
//! Console presentation helpers.

pub mod summary_table;
