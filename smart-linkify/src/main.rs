// smart-linkify/src/main.rs
//! smart-linkify entry point.
//!
//! Parses arguments, initialises logging and dispatches to the command runners.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use smart_linkify::cli::{Cli, Commands};
use smart_linkify::commands::{linkify, presets, scan};
use smart_linkify::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    match args.command {
        Commands::Linkify(cmd) => linkify::run_linkify(&cmd),
        Commands::Scan(cmd) => scan::run_scan(&cmd),
        Commands::Presets(cmd) => presets::run_presets(&cmd),
    }
}
