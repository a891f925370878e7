// textmend/src/commands/clean.rs
//! Clean command implementation for repairing a single input.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use textmend_core::{RepairEngine, RepairSummaryItem};

/// Options for the ergonomic run_clean API.
pub struct CleanOptions {
    pub input_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub no_summary: bool,
    pub quiet: bool,
}

/// The main operation runner for the `clean` subcommand.
pub fn run_clean(engine: &dyn RepairEngine, opts: CleanOptions) -> Result<()> {
    info!("Starting clean operation.");

    let (input, source_id) = read_input(&opts)?;

    let (repaired, summary) = engine
        .repair(&input, &source_id)
        .context("Repair failed")?;

    debug!(
        "Content repaired. Original length: {}, repaired length: {}",
        input.len(),
        repaired.len()
    );

    write_output(&opts, &repaired)?;

    if !opts.no_summary && !opts.quiet {
        print_summary(&summary, &mut io::stderr())?;
    }

    info!("Clean operation completed.");
    Ok(())
}

fn read_input(opts: &CleanOptions) -> Result<(String, String)> {
    match &opts.input_file {
        Some(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?;
            Ok((content, path.display().to_string()))
        }
        None => {
            info!("Reading input from stdin...");
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok((buffer, "stdin".to_string()))
        }
    }
}

fn write_output(opts: &CleanOptions, repaired: &str) -> Result<()> {
    match &opts.output {
        Some(path) => {
            info!("Writing repaired content to file: {}", path.display());
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{}", repaired)?;
        }
        None => {
            debug!("Writing repaired content to stdout.");
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            writeln!(writer, "{}", repaired)?;
        }
    }
    Ok(())
}

fn print_summary(summary: &[RepairSummaryItem], writer: &mut impl Write) -> Result<()> {
    if summary.is_empty() {
        writeln!(writer, "No repairs were necessary.")?;
        return Ok(());
    }

    writeln!(writer, "Repair summary:")?;
    for item in summary {
        let plural = if item.occurrences == 1 { "" } else { "s" };
        writeln!(
            writer,
            "  {} ({} occurrence{})",
            item.rule_name, item.occurrences, plural
        )?;
    }
    Ok(())
}
