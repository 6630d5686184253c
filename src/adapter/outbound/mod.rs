//! Outbound adapters: how the orchestrator reaches its workers.
//!
//! - [`local`]: in-process clients that behave like remote calls

pub mod local;

pub use local::LocalClient;
