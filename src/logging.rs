//! Diagnostic logging for the command-line tool.
//!
//! Library code emits `tracing` events; this sets up the subscriber that
//! prints them to stderr so stdout carries only expanded strings.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map a `-v` count to a level: warn, info, debug, then trace.
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `level` when set.
pub fn init_logging(level: LevelFilter) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pattern_expander={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize logging: {err}"))
}
