//! Stderr backend for the `log` facade
//!
//! `-v` picks the base level; `RUST_LOG` can refine it per module.

use log::{LevelFilter, SetLoggerError};

/// Level for a `-v` count: warnings by default, then info, debug, trace
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn builder(level: LevelFilter) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false);
    builder
}

/// Install the stderr logger at `level`
///
/// # Errors
/// Fails if a logger was already installed.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    builder(level).try_init()
}
