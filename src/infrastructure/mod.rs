//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic.
//!
//! # Submodules
//!
//! - [`config`] - Configuration loading and validation
//! - [`logger`] - Per-service structured loggers and the rotating file sink

pub mod config;
pub mod logger;
