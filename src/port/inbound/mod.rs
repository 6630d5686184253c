//! Inbound (driving) ports consumed by inbound adapters.
//!
//! - [`worker`]: the entry operation every worker exposes

pub mod worker;

pub use worker::WorkerService;
