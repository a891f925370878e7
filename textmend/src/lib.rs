// textmend/src/lib.rs
//! # textmend CLI Application
//!
//! This crate provides the command-line interface for the textmend repair
//! engine: a one-shot `clean` command for single inputs and a `sweep` command
//! that walks source trees and rewrites corrupted files in place.

pub mod cli;
pub mod commands;
pub mod logger;

// Re-export the batch runner for embedding and for integration tests.
pub use commands::sweep::{run_sweep, SweepOptions, SweepReport};
