// textmend/src/main.rs
//! Textmend entry point.
//!
//! Builds the repair engine from the built-in rules (plus an optional user
//! rule file) and dispatches to the selected subcommand. Invoking the bare
//! binary runs a default sweep, so the tool still works as a zero-argument
//! maintenance script.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::Path;

use textmend::cli::{Cli, Commands, SweepCommand};
use textmend::commands::clean::{run_clean, CleanOptions};
use textmend::commands::sweep::{run_sweep, SweepOptions};
use textmend::logger;
use textmend_core::{merge_rules, LiteralEngine, RepairConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if cli.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    info!("textmend started. Version: {}", env!("CARGO_PKG_VERSION"));

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Sweep(SweepCommand::default()));

    match command {
        Commands::Sweep(cmd) => {
            let engine = build_engine(cmd.config.as_deref())?;
            let options = SweepOptions::from_cli(
                cmd.roots,
                cmd.extensions,
                cmd.exclude,
                cmd.max_file_size,
                cmd.dry_run,
            );
            let report = run_sweep(&engine, &options)?;
            if cmd.json_stdout {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
        Commands::Clean(cmd) => {
            let engine = build_engine(cmd.config.as_deref())?;
            run_clean(
                &engine,
                CleanOptions {
                    input_file: cmd.input_file,
                    output: cmd.output,
                    no_summary: cmd.no_summary,
                    quiet: cli.quiet,
                },
            )?;
        }
    }

    Ok(())
}

/// Loads the built-in rules, merges an optional user rule file over them,
/// and builds the literal repair engine.
fn build_engine(config_path: Option<&Path>) -> Result<LiteralEngine> {
    let mut config = RepairConfig::load_default_rules()?;

    if let Some(path) = config_path {
        let user_config = RepairConfig::load_from_file(path)
            .with_context(|| format!("Failed to load rules from {}", path.display()))?;
        config = merge_rules(config, Some(user_config));
    }

    LiteralEngine::new(config)
}
