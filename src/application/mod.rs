//! Application services (use cases).
//!
//! - [`AlphaService`]: the orchestrator
//! - [`BravoService`]: Worker A, reverse and uppercase
//! - [`CharlieService`]: Worker B, vowel masking
//! - [`RequestContext`]: logger and request id threaded through every call

pub mod alpha;
pub mod bravo;
pub mod charlie;
pub mod context;

pub use alpha::AlphaService;
pub use bravo::BravoService;
pub use charlie::CharlieService;
pub use context::RequestContext;
