// smart-linkify/src/commands/scan.rs
//! The `scan` command: summarize what would be linked.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io::{self, Write};

use smart_linkify_core::LinkifyEngine;

use crate::cli::ScanCommand;
use crate::commands::options::resolve_options;
use crate::commands::read_input;
use crate::ui::summary_table::build_summary_table;

/// Runs the `scan` command.
pub fn run_scan(cmd: &ScanCommand) -> Result<()> {
    let options = resolve_options(&cmd.options)?;
    let input = read_input(cmd.input_file.as_deref())?;

    let summary = LinkifyEngine::new(&options).summarize(&input).context("Scan failed")?;
    info!("Scan found {} entity kind(s).", summary.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cmd.json {
        let json = serde_json::to_string_pretty(&summary).context("Failed to serialize scan summary")?;
        writeln!(out, "{}", json)?;
    } else if summary.is_empty() {
        writeln!(out, "No linkable entities found.")?;
    } else {
        let table = build_summary_table(&summary, stdout.is_terminal());
        writeln!(out, "{}", table)?;
    }
    Ok(())
}
