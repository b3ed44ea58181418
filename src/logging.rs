//! Logging setup.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::LogLevel;

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// CLI level so a single invocation can be narrowed to one module.
pub fn setup_logging(level: LogLevel, json: bool) {
    let default_directive = match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty())
            .init();
    }
}
