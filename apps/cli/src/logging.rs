//! Diagnostic logging on stderr.
//!
//! Results and evaluation errors go to stdout; everything emitted through
//! `tracing` goes to stderr so scripts can consume the output unchanged.

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::settings::{LogFormat, Settings};

/// Filter used when neither settings nor `RUST_LOG` name one.
pub const DEFAULT_FILTER: &str = "warn";

/// Logging configuration of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive.
    pub filter: String,
    /// Event layout.
    pub format: LogFormat,
}

impl LogConfig {
    /// Level from `BS_CALC_LOG` (or the settings file), then `RUST_LOG`,
    /// then [`DEFAULT_FILTER`].
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        let filter = settings
            .log
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        Self {
            filter,
            format: settings.log_format,
        }
    }
}

/// Install the global subscriber.
pub fn init(config: &LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter '{}'", config.filter))?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match config.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
    .map_err(|err| anyhow!(err))
    .context("failed to install log subscriber")
}
