// textmend/src/commands/sweep.rs
//! Sweep command implementation: walks the configured root directories and
//! repairs eligible files in place.
//!
//! The walk prunes excluded directory names before descending, so excluded
//! subtrees are never opened. Every file encountered counts as scanned;
//! files that are too large or fail to read/write count as skipped; files
//! whose repaired content differs from the original are rewritten and count
//! as changed. A single bad file never stops the sweep.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use textmend_core::RepairEngine;

/// Files larger than this are assumed non-source and are never read.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 2 * 1024 * 1024;

/// Root directories swept when none are given on the command line.
pub const DEFAULT_ROOTS: &[&str] = &["src", "tools"];

/// Extensions of files that are candidates for rewriting.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "ts", "tsx", "js", "jsx", "css", "md", "json", "mjs", "cjs", "txt",
];

/// Directory names that are pruned from the walk entirely.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &["node_modules", ".next", ".git"];

/// Options for the ergonomic run_sweep API.
#[derive(Debug, Clone)]
pub struct SweepOptions {
    pub roots: Vec<PathBuf>,
    /// Lowercased extensions; matching is case-insensitive on the final extension.
    pub extensions: HashSet<String>,
    pub exclude_dirs: HashSet<String>,
    pub max_file_size: u64,
    /// When set, count what would change but write nothing.
    pub dry_run: bool,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            roots: DEFAULT_ROOTS.iter().map(PathBuf::from).collect(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|d| d.to_string()).collect(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            dry_run: false,
        }
    }
}

impl SweepOptions {
    /// Builds options from command-line values, falling back to the built-in
    /// defaults for every list that was left empty.
    pub fn from_cli(
        roots: Vec<PathBuf>,
        extensions: Vec<String>,
        exclude: Vec<String>,
        max_file_size: Option<u64>,
        dry_run: bool,
    ) -> Self {
        let defaults = Self::default();
        Self {
            roots: if roots.is_empty() { defaults.roots } else { roots },
            extensions: if extensions.is_empty() {
                defaults.extensions
            } else {
                extensions
                    .into_iter()
                    .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                    .collect()
            },
            exclude_dirs: if exclude.is_empty() {
                defaults.exclude_dirs
            } else {
                exclude.into_iter().collect()
            },
            max_file_size: max_file_size.unwrap_or(defaults.max_file_size),
            dry_run,
        }
    }
}

/// Aggregate counters for one sweep run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepReport {
    /// Files encountered during the walk (pruned subtrees never count).
    pub scanned: u64,
    /// Files rewritten (or, in a dry run, files that would be rewritten).
    pub changed: u64,
    /// Files excluded from repair: too large, unreadable, or unwritable.
    pub skipped: u64,
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Cleanup done. Scanned: {}, Changed: {}, Skipped: {}",
            self.scanned, self.changed, self.skipped
        )
    }
}

/// What happened to a single candidate file.
enum FileOutcome {
    /// Nothing to do: no markers, or repair produced identical content.
    Clean,
    /// The repaired content differs; the file was (or would be) rewritten.
    Changed,
    /// The file exceeds the size threshold and was never read.
    TooLarge,
}

/// Walks every configured root and repairs eligible files in place.
///
/// Missing roots contribute zero files. Per-file failures are demoted to
/// skips so the rest of the tree is still processed.
pub fn run_sweep(engine: &dyn RepairEngine, options: &SweepOptions) -> Result<SweepReport> {
    info!("Starting sweep over {} root(s).", options.roots.len());
    let mut report = SweepReport::default();

    for root in &options.roots {
        if !root.is_dir() {
            debug!("Sweep root {} does not exist, skipping.", root.display());
            continue;
        }

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_excluded_dir(e, &options.exclude_dirs));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    debug!("Skipping unreadable entry under {}: {}", root.display(), err);
                    report.skipped += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            report.scanned += 1;

            if !has_eligible_extension(entry.path(), &options.extensions) {
                continue;
            }

            match process_file(engine, entry.path(), options) {
                Ok(FileOutcome::Changed) => report.changed += 1,
                Ok(FileOutcome::TooLarge) => report.skipped += 1,
                Ok(FileOutcome::Clean) => {}
                Err(err) => {
                    debug!("Skipping {}: {:#}", entry.path().display(), err);
                    report.skipped += 1;
                }
            }
        }
    }

    info!(
        "Sweep finished. Scanned: {}, changed: {}, skipped: {}.",
        report.scanned, report.changed, report.skipped
    );
    Ok(report)
}

fn is_excluded_dir(entry: &DirEntry, exclude_dirs: &HashSet<String>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| exclude_dirs.contains(name))
}

fn has_eligible_extension(path: &Path, extensions: &HashSet<String>) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.contains(&ext.to_ascii_lowercase()))
}

fn process_file(
    engine: &dyn RepairEngine,
    path: &Path,
    options: &SweepOptions,
) -> Result<FileOutcome> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?;
    if metadata.len() > options.max_file_size {
        debug!(
            "File {} is {} bytes, over the {} byte threshold.",
            path.display(),
            metadata.len(),
            options.max_file_size
        );
        return Ok(FileOutcome::TooLarge);
    }

    let before = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if !engine.needs_repair(&before) {
        return Ok(FileOutcome::Clean);
    }

    let source_id = path.display().to_string();
    let (after, summary) = engine
        .repair(&before, &source_id)
        .with_context(|| format!("Repair failed for {}", path.display()))?;

    if after == before {
        return Ok(FileOutcome::Clean);
    }

    debug!(
        "Rewriting {} ({} rule(s) hit).",
        path.display(),
        summary.len()
    );
    if !options.dry_run {
        fs::write(path, &after)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(FileOutcome::Changed)
}
