//! Configuration for the strategy runner.
//!
//! The tuning surface is a set of constants with `Default` impls, not a
//! config file. Only credentials come from the environment, and a missing
//! credential is fatal before any pass begins.

mod settings;

pub use settings::{
    Credentials, RateLimitSettings, SizingSettings, StrategySettings, WatchlistSettings,
};

use thiserror::Error;

/// Startup configuration failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),
}

pub(crate) fn require_env(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnv(name))
}
