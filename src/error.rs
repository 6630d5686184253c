use thiserror::Error;

use crate::domain::WorkerKind;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    /// The request context lacks the logger or the request id.
    #[error("{field} not passed through request context")]
    MissingContext { field: &'static str },

    /// A worker call failed. The cause is logged where it happened and
    /// deliberately not carried upward.
    #[error("error while contacting {worker} service")]
    Downstream { worker: WorkerKind },

    /// A worker stage failed while manipulating its input.
    ///
    /// Both current transforms are infallible once the entry check has
    /// passed, so this only guards stages that can fail. The stage error
    /// itself is logged, never carried.
    #[error("error while manipulating string")]
    Transform,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
