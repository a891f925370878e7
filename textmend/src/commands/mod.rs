// textmend/src/commands/mod.rs
//! Implementations of the individual CLI subcommands.

pub mod clean;
pub mod sweep;
