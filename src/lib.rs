//! Triad - a layered service-call demonstration.
//!
//! An orchestrator (alpha) takes a composite request and synchronously
//! delegates parts of it to two workers: bravo reverses and uppercases,
//! charlie masks vowels. The results are merged with the primary content.
//! Every service logs to its own rotating JSON file, and every entry is
//! tagged with the service identity and the request id.
//!
//! # Modules
//!
//! - [`domain`] - Request/response types and the pure string transforms
//! - [`port`] - [`WorkerClient`](port::WorkerClient) and
//!   [`WorkerService`](port::WorkerService) traits
//! - [`application`] - The three services and the request context
//! - [`adapter`] - In-process worker clients
//! - [`infrastructure`] - Configuration and per-service loggers
//! - [`app`] - Wiring for a full request
//! - [`cli`] - Command-line interface
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use triad::app::App;
//! use triad::domain::{CompositeRequest, SAMPLE_REQUEST_ID};
//! use triad::infrastructure::config::Config;
//!
//! let response = App::run(&Config::default(), SAMPLE_REQUEST_ID, CompositeRequest::sample())?;
//! println!("{}", response.bravo_manipulated_content);
//! # Ok::<(), triad::error::Error>(())
//! ```

pub mod adapter;
pub mod app;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
