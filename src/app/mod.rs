//! Application layer - wiring configuration, loggers and services together.

mod orchestrator;

pub use orchestrator::App;
