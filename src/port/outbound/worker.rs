//! Worker client port.

use crate::domain::{WorkerRequest, WorkerResponse};
use crate::error::Result;

/// Port for calling a worker as if it were a remote service.
///
/// The caller passes only the request id and the payload; the callee owns
/// its logger and builds its own request context, so nothing but plain
/// values crosses this boundary.
pub trait WorkerClient: Send + Sync {
    /// Call the worker.
    ///
    /// Errors are opaque to the caller; the orchestrator logs them and
    /// reports [`Error::Downstream`](crate::error::Error::Downstream).
    fn call(&self, request_id: &str, request: WorkerRequest) -> Result<WorkerResponse>;
}
