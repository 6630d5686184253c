//! Worker entry port.

use crate::application::RequestContext;
use crate::domain::{WorkerRequest, WorkerResponse};
use crate::error::Result;

/// Entry operation of a worker service.
///
/// Implementations validate the context first and return
/// [`Error::MissingContext`](crate::error::Error::MissingContext) when the
/// logger or request id is absent. Any later failure is reported as
/// [`Error::Transform`](crate::error::Error::Transform) with the cause logged.
pub trait WorkerService: Send + Sync {
    /// Handle one request.
    fn handle(&self, ctx: &RequestContext, request: WorkerRequest) -> Result<WorkerResponse>;
}
