//! Logging configuration.

use std::env;

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::{ConfigError, Result};

/// Environment variable that overrides [`LoggingConfig::level`].
pub const LOG_ENV: &str = "TRIAD_LOG";

/// Logging configuration shared by every service logger.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// Mirror every entry to stderr.
    #[serde(default = "default_true")]
    pub console: bool,
    /// Size at which a log file is rotated.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
    /// Rotated files kept per service. Zero keeps none.
    #[serde(default = "default_max_backups")]
    pub max_backups: usize,
}

fn default_level() -> String {
    "info".into()
}

const fn default_true() -> bool {
    true
}

const fn default_max_file_bytes() -> u64 {
    100 * 1024 * 1024
}

const fn default_max_backups() -> usize {
    5
}

impl LoggingConfig {
    /// Build the level filter, letting `TRIAD_LOG` win over the configured level.
    ///
    /// An unparsable override is an error rather than a silent fallback.
    #[allow(clippy::result_large_err)]
    pub fn filter(&self) -> Result<EnvFilter> {
        self.filter_with(env::var(LOG_ENV).ok().as_deref())
    }

    #[allow(clippy::result_large_err)]
    fn filter_with(&self, env_override: Option<&str>) -> Result<EnvFilter> {
        match env_override.map(str::trim).filter(|s| !s.is_empty()) {
            Some(directives) => EnvFilter::try_new(directives).map_err(|e| {
                ConfigError::InvalidValue {
                    field: LOG_ENV,
                    reason: e.to_string(),
                }
                .into()
            }),
            None => Ok(EnvFilter::new(&self.level)),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            console: default_true(),
            max_file_bytes: default_max_file_bytes(),
            max_backups: default_max_backups(),
        }
    }
}
