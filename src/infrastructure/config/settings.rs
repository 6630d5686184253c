//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every field has a default, so running without a file reproduces the
//! built-in service identities and log paths.
//!
//! # Example
//!
//! ```no_run
//! use triad::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("triad.toml")?;
//!     println!("{}", config.alpha.log_file.display());
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing_subscriber::filter::Directive;

use super::logging::LoggingConfig;
use super::service::ServiceConfig;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The orchestrator.
    #[serde(default = "ServiceConfig::alpha")]
    pub alpha: ServiceConfig,
    /// Worker A.
    #[serde(default = "ServiceConfig::bravo")]
    pub bravo: ServiceConfig,
    /// Worker B.
    #[serde(default = "ServiceConfig::charlie")]
    pub charlie: ServiceConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alpha: ServiceConfig::alpha(),
            bravo: ServiceConfig::bravo(),
            charlie: ServiceConfig::charlie(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    #[allow(clippy::result_large_err)]
    pub fn validate(&self) -> Result<()> {
        for service in [&self.alpha, &self.bravo, &self.charlie] {
            validate_service(service)?;
        }

        if self.logging.max_file_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_file_bytes",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        for part in self.logging.level.split(',') {
            if let Err(e) = part.trim().parse::<Directive>() {
                return Err(ConfigError::InvalidValue {
                    field: "level",
                    reason: e.to_string(),
                }
                .into());
            }
        }
        self.logging.filter()?;
        Ok(())
    }
}

#[allow(clippy::result_large_err)]
fn validate_service(service: &ServiceConfig) -> Result<()> {
    if service.name.trim().is_empty() {
        return Err(ConfigError::MissingField { field: "name" }.into());
    }
    if service.version.trim().is_empty() {
        return Err(ConfigError::MissingField { field: "version" }.into());
    }
    if service.log_file.as_os_str().is_empty() {
        return Err(ConfigError::MissingField { field: "log_file" }.into());
    }
    Ok(())
}
