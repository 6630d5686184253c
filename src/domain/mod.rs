//! Domain types shared by the services and the pure worker transforms.

mod ids;
mod request;
mod worker;

pub mod text;

pub use ids::RequestId;
pub use request::{
    CompositeRequest, CompositeResponse, WorkerRequest, WorkerResponse, SAMPLE_REQUEST_ID,
};
pub use worker::WorkerKind;
