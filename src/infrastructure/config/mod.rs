//! Infrastructure configuration modules.

pub mod logging;
pub mod service;
pub mod settings;

pub use logging::{LoggingConfig, LOG_ENV};
pub use service::{Environment, ServiceConfig};
pub use settings::Config;
