//! Per-service configuration.

use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Deployment mode of a service. Controls the console log format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Human-readable console output.
    #[serde(alias = "development")]
    Dev,
    /// JSON console output.
    #[serde(alias = "staging")]
    Stg,
    /// JSON console output.
    #[default]
    #[serde(alias = "production")]
    Prd,
}

impl Environment {
    /// Whether console output should be structured JSON.
    pub const fn is_structured(self) -> bool {
        matches!(self, Self::Stg | Self::Prd)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dev => write!(f, "dev"),
            Self::Stg => write!(f, "stg"),
            Self::Prd => write!(f, "prd"),
        }
    }
}

/// Identity and log destination of one service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub version: String,
    /// File the service's JSON log lines go to.
    pub log_file: PathBuf,
    #[serde(default)]
    pub mode: Environment,
}

impl ServiceConfig {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        log_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            log_file: log_file.into(),
            mode: Environment::default(),
        }
    }

    pub fn alpha() -> Self {
        Self::new("alpha", "v1.0.0", "logs/log.svc.a.log")
    }

    pub fn bravo() -> Self {
        Self::new("bravo", "v2.0.0", "logs/log.svc.b.log")
    }

    pub fn charlie() -> Self {
        Self::new("charlie", "v3.0.0", "logs/log.svc.c.log")
    }
}
