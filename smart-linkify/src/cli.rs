// smart-linkify/src/cli.rs
//! This file defines the command-line interface (CLI) for the smart-linkify application,
//! including all available commands and their arguments.
//! License: MIT OR APACHE 2.0

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use smart_linkify_core::{LinkTarget, TruncateStrategy};

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "smart-linkify",
    author = "Relay",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn URLs, emails, phone numbers, hashtags and mentions into safe, styled links",
    long_about = "smart-linkify reads free-form text and rewrites recognized URLs, email addresses, phone numbers, hashtags and mentions into HTML anchor markup. Input is length-capped, displayed text is HTML-escaped, and domain allow/block lists and tracking-parameter removal are available.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `smart-linkify` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rewrites entities in an input file or stdin into links.
    #[command(about = "Rewrites entities in an input file or stdin into HTML links.")]
    Linkify(LinkifyCommand),

    /// Reports what would be linked without rewriting anything.
    #[command(about = "Scans an input and prints a per-kind summary of the links it would create.")]
    Scan(ScanCommand),

    /// Lists and shows the built-in presets.
    #[command(subcommand, about = "Lists and shows the built-in option presets.")]
    Presets(PresetsCommand),
}

/// Options shared by `linkify` and `scan`. Resolved as preset, then config file, then flags.
#[derive(Args, Debug, Default, Clone)]
pub struct OptionArgs {
    /// Start from a built-in preset name or a preset YAML file.
    #[arg(long = "preset", short = 'p', value_name = "NAME|PATH", help = "Start from a built-in preset or a preset YAML file.")]
    pub preset: Option<String>,

    /// Path to a linkify options file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a linkify options file (YAML), merged over the preset.")]
    pub config: Option<PathBuf>,

    #[arg(long = "emails", help = "Detect email addresses.")]
    pub emails: bool,

    #[arg(long = "phones", help = "Detect phone numbers.")]
    pub phones: bool,

    /// Template for hashtag links, e.g. `https://example.com/tags/{tag}`.
    #[arg(long = "hashtag-url", value_name = "TEMPLATE", help = "Link hashtags using this URL template ({tag}).")]
    pub hashtag_url: Option<String>,

    /// Template for mention links, e.g. `https://example.com/{username}`.
    #[arg(long = "mention-url", value_name = "TEMPLATE", help = "Link mentions using this URL template ({username}).")]
    pub mention_url: Option<String>,

    #[arg(long = "remove-tracking", help = "Strip known tracking parameters from link targets.")]
    pub remove_tracking: bool,

    #[arg(long = "sanitize", help = "HTML-escape the input before linking.")]
    pub sanitize: bool,

    #[arg(long = "allowed-tag", value_name = "TAG", value_delimiter = ',', help = "Tags left intact by --sanitize (comma-separated).")]
    pub allowed_tags: Vec<String>,

    #[arg(long = "block", value_name = "DOMAIN", value_delimiter = ',', help = "Never link hosts containing these domains (comma-separated).")]
    pub block: Vec<String>,

    #[arg(long = "allow", value_name = "DOMAIN", value_delimiter = ',', help = "Only link hosts containing these domains (comma-separated).")]
    pub allow: Vec<String>,

    #[arg(long = "max-length", value_name = "N", help = "Truncate displayed URLs longer than N characters.")]
    pub max_length: Option<usize>,

    #[arg(long = "truncate", value_name = "STRATEGY", value_enum, help = "How to truncate long URLs.")]
    pub truncate: Option<TruncateChoice>,

    #[arg(long = "target", value_name = "TARGET", value_enum, help = "Where links open.")]
    pub target: Option<TargetChoice>,

    #[arg(long = "max-input-length", value_name = "N", help = "Reject input longer than N characters (default 50000).")]
    pub max_input_length: Option<usize>,
}

/// Arguments for the `linkify` command.
#[derive(Parser, Debug)]
pub struct LinkifyCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Process input line by line (useful for streaming data from pipes).
    #[arg(long = "line-buffered", help = "Process input line by line (useful for streaming data from pipes).")]
    pub line_buffered: bool,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Print the summary as JSON to stdout.
    #[arg(long = "json", help = "Print the summary as JSON instead of a table.")]
    pub json: bool,

    #[command(flatten)]
    pub options: OptionArgs,
}

/// Subcommands for the `presets` command.
#[derive(Subcommand, Debug)]
pub enum PresetsCommand {
    #[command(about = "Lists the built-in presets.")]
    List,
    #[command(about = "Prints a preset as YAML.")]
    Show {
        /// A built-in preset name or a preset file path.
        #[arg(value_name = "NAME|PATH", help = "A built-in preset name or a preset file path.")]
        name: String,
    },
}

/// Truncation strategies accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TruncateChoice {
    End,
    Middle,
    Smart,
}

impl From<TruncateChoice> for TruncateStrategy {
    fn from(choice: TruncateChoice) -> Self {
        match choice {
            TruncateChoice::End => TruncateStrategy::End,
            TruncateChoice::Middle => TruncateStrategy::Middle,
            TruncateChoice::Smart => TruncateStrategy::Smart,
        }
    }
}

/// Link targets accepted on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum TargetChoice {
    /// Open in a new browsing context (`_blank`).
    Blank,
    /// Open in the current browsing context (`_self`).
    #[value(name = "self")]
    SelfContext,
}

impl From<TargetChoice> for LinkTarget {
    fn from(choice: TargetChoice) -> Self {
        match choice {
            TargetChoice::Blank => LinkTarget::Blank,
            TargetChoice::SelfContext => LinkTarget::SelfContext,
        }
    }
}
