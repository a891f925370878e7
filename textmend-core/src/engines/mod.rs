// textmend-core/src/engines/mod.rs
//! This module contains the repair engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `RepairEngine` trait. To add a new engine, create a new file (e.g.,
//! `heuristic.rs`), define its logic, and declare it here using
//! `pub mod <engine_name>;`.

pub mod literal;
