// textmend/src/cli.rs
//! This file defines the command-line interface (CLI) for the textmend
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
///
/// The subcommand is optional: invoking the bare binary runs `sweep` with the
/// compiled-in defaults, so the tool keeps working as a zero-argument
/// maintenance script.
#[derive(Parser, Debug)]
#[command(
    name = "textmend",
    author,
    version = env!("CARGO_PKG_VERSION"),
    about = "Repair mojibake in text and source trees",
    long_about = "Textmend is a command-line utility for repairing mojibake: text corrupted by decoding UTF-8 bytes with the wrong character encoding. It replaces known mis-decoded punctuation sequences with their ASCII equivalents according to a configurable rule set, and can sweep whole source trees, rewriting corrupted files in place.",
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for the textmend crates to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// The subcommand to run; defaults to `sweep` with built-in settings.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// All available commands for the `textmend` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walks the configured root directories and repairs eligible files in place.
    #[command(about = "Walks root directories and repairs corrupted files in place.")]
    Sweep(SweepCommand),

    /// Repairs a single input (stdin or a file) and writes the result.
    #[command(about = "Repairs a single input from stdin or a file.")]
    Clean(CleanCommand),
}

/// Arguments for the `sweep` command.
#[derive(Parser, Debug, Default)]
pub struct SweepCommand {
    /// Root directories to sweep (defaults to the built-in root list).
    #[arg(value_name = "ROOT", help = "Root directories to sweep; built-in defaults apply when omitted.")]
    pub roots: Vec<PathBuf>,

    /// Only files with these extensions are rewritten (comma-separated).
    #[arg(long = "ext", short = 'e', value_delimiter = ',', help = "Eligible file extensions, comma-separated (case-insensitive).")]
    pub extensions: Vec<String>,

    /// Directory names that are never descended into (comma-separated).
    #[arg(long = "exclude", short = 'x', value_delimiter = ',', help = "Directory names to prune from the walk, comma-separated.")]
    pub exclude: Vec<String>,

    /// Skip files larger than this many bytes.
    #[arg(long = "max-file-size", value_name = "BYTES", help = "Skip files larger than this many bytes.")]
    pub max_file_size: Option<u64>,

    /// Report what would change without writing anything.
    #[arg(long = "dry-run", help = "Report what would change without rewriting any file.")]
    pub dry_run: bool,

    /// Print the final report as JSON to stdout instead of the summary line.
    #[arg(long = "json-stdout", help = "Print the sweep report to stdout as JSON.")]
    pub json_stdout: bool,

    /// Path to a custom repair configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom repair configuration file (YAML).")]
    pub config: Option<PathBuf>,
}

/// Arguments for the `clean` command.
#[derive(Parser, Debug)]
pub struct CleanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(long, short = 'i', value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Write repaired output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Path to a custom repair configuration file (YAML).
    #[arg(long = "config", value_name = "FILE", help = "Path to a custom repair configuration file (YAML).")]
    pub config: Option<PathBuf>,

    /// Suppress the repair summary.
    #[arg(long = "no-repair-summary", help = "Suppress the repair summary.")]
    pub no_summary: bool,
}
