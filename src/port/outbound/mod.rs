//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe how the orchestrator reaches its workers.

pub mod worker;

pub use worker::WorkerClient;
