// textmend/src/logger.rs
//! Logging setup for the textmend CLI.
//!
//! Wraps `env_logger` so the binary can map `--quiet` and `--debug` onto
//! level filters while still honoring `RUST_LOG` for everything else.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the process-wide logger exactly once.
///
/// When `level` is `Some`, it overrides the filter for the textmend crates;
/// otherwise the `RUST_LOG` environment variable applies, defaulting to
/// `info`.
pub fn init_logger(level: Option<log::LevelFilter>) {
    INIT.call_once(|| {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));

        if let Some(level) = level {
            builder.filter_module("textmend", level);
            builder.filter_module("textmend_core", level);
        }

        builder.try_init().ok();
    });
}
