//! Structured logging configuration.

use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;
use crate::{Error, Result};

/// Primary filter environment variable.
pub const LOG_ENV: &str = "SETUP_LOG";

/// Format environment variable.
pub const LOG_FORMAT_ENV: &str = "SETUP_LOG_FORMAT";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(Error::InvalidInput(format!("unknown log format '{other}'"))),
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug)]
pub struct LoggingConfig {
    /// Event filter.
    pub filter: EnvFilter,
    /// Output format.
    pub format: LogFormat,
    /// Log file; stderr when unset.
    pub file: Option<PathBuf>,
}

impl LoggingConfig {
    /// Resolves logging from config settings with environment overrides.
    ///
    /// Filter precedence: `SETUP_LOG`, `RUST_LOG`, the settings, then `debug`
    /// when verbose or `warn` otherwise. `SETUP_LOG_FORMAT` overrides the
    /// configured format; unknown formats fall back to pretty output.
    #[must_use]
    pub fn from_settings(settings: Option<&LoggingSettings>, verbose: bool) -> Self {
        Self::resolve(
            settings,
            verbose,
            std::env::var(LOG_ENV)
                .ok()
                .or_else(|| std::env::var("RUST_LOG").ok()),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    fn resolve(
        settings: Option<&LoggingSettings>,
        verbose: bool,
        env_filter: Option<String>,
        env_format: Option<String>,
    ) -> Self {
        let fallback = if verbose { "debug" } else { "warn" };
        let directive = env_filter
            .or_else(|| settings.and_then(|s| s.filter.clone()))
            .unwrap_or_else(|| fallback.to_string());
        let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(fallback));

        let format = env_format
            .or_else(|| settings.and_then(|s| s.format.clone()))
            .and_then(|f| f.parse().ok())
            .unwrap_or_default();

        Self {
            filter,
            format,
            file: settings.and_then(|s| s.file.clone()),
        }
    }
}
