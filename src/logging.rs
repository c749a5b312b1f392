use std::io::stderr;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, StatsError};

/// Filter directive for a `-v` count: warn by default, then info, then debug.
pub fn level_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "bdl_stats=warn",
        1 => "bdl_stats=info",
        _ => "bdl_stats=debug",
    }
}

/// `RUST_LOG` wins when it is set; otherwise the `-v` count decides.
pub fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_directive(verbosity)))
}

/// Sets up logging for the process.
///
/// Logs go to stderr so that reports written to stdout stay clean.
pub fn setup_logging(verbosity: u8) -> Result<()> {
    tracing_subscriber::registry()
        .with(
            fmt::Layer::new()
                .with_writer(stderr)
                .with_target(false)
                .with_filter(env_filter(verbosity)),
        )
        .try_init()
        .map_err(|e| StatsError::LogSetup(e.to_string()))
}
