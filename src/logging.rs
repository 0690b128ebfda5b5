//! Diagnostic logging
//!
//! Logs go to stderr through `tracing`, keeping stdout for the summary. The
//! filter comes from `HEFT_LOG` when set (EnvFilter directive syntax), else
//! from the verbosity flags. `HEFT_LOG_FORMAT=json` overrides the format.

use std::str::FromStr;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Error, Result};

pub const LOG_ENV: &str = "HEFT_LOG";
pub const LOG_FORMAT_ENV: &str = "HEFT_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!(
                "invalid log format: {} (must be 'text' or 'json')",
                other
            )),
        }
    }
}

/// Logging configuration resolved from the command line.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// Number of `-v` flags
    pub verbosity: u8,
    /// Only errors
    pub quiet: bool,
    pub format: LogFormat,
    pub color: bool,
}

impl LoggingConfig {
    /// Level implied by the flags when `HEFT_LOG` is not set.
    pub fn level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new(config.level()),
    };

    let format = match std::env::var(LOG_FORMAT_ENV) {
        Ok(value) => value.parse().map_err(Error::Logging)?,
        Err(_) => config.format,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(config.color)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    installed.map_err(|e| Error::Logging(e.to_string()))
}
