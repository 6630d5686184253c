//! Trait definitions (hexagonal ports).
//!
//! Ports define the seams between the orchestrator and the workers. The
//! orchestrator only ever sees [`WorkerClient`]; each worker only ever
//! implements [`WorkerService`]. Adapters join the two.
//!
//! # Architecture
//!
//! ```text
//!   ┌──────────────┐   WorkerClient    ┌─────────────┐   WorkerService   ┌──────────────┐
//!   │ AlphaService ├──────────────────▶│ LocalClient ├──────────────────▶│ Bravo/Charlie│
//!   └──────────────┘                   └─────────────┘                   └──────────────┘
//! ```

pub mod inbound;
pub mod outbound;

pub use inbound::WorkerService;
pub use outbound::WorkerClient;
