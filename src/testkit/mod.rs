//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`client`]: [`StubClient`](client::StubClient), a scripted
//!   [`WorkerClient`](crate::port::WorkerClient) that records its calls.
//! - [`logs`]: Loggers whose JSON output is captured in memory.
//! - [`config`]: Canonical test configurations.

pub mod client;
pub mod config;
pub mod logs;
