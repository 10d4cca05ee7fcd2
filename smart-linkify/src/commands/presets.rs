// smart-linkify/src/commands/presets.rs
//! The `presets` command: list and show option presets.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::io::{self, Write};

use smart_linkify_core::{load_preset_by_name, PRESETS};

use crate::cli::PresetsCommand;
use crate::ui::summary_table::build_presets_table;

/// Runs the `presets` subcommands.
pub fn run_presets(cmd: &PresetsCommand) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cmd {
        PresetsCommand::List => {
            let table = build_presets_table(PRESETS, stdout.is_terminal());
            writeln!(out, "{}", table)?;
        }
        PresetsCommand::Show { name } => {
            let options = load_preset_by_name(name)?;
            let yaml = options
                .to_yaml_string()
                .with_context(|| format!("Preset '{}' can not be shown as YAML", name))?;
            write!(out, "{}", yaml)?;
        }
    }
    Ok(())
}
