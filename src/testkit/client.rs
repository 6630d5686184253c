//! Scripted worker client.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{WorkerRequest, WorkerResponse};
use crate::error::{Error, Result};
use crate::port::WorkerClient;

#[derive(Clone)]
enum Behavior {
    Transform(fn(&str) -> String),
    Fail(String),
}

/// A [`WorkerClient`] with canned behavior.
///
/// Clones share the call log, so a test can keep one handle while the
/// orchestrator owns another.
#[derive(Clone)]
pub struct StubClient {
    behavior: Behavior,
    calls: Arc<Mutex<Vec<(String, WorkerRequest)>>>,
}

impl StubClient {
    /// Answer every call with `transform(request.content)`.
    pub fn with_transform(transform: fn(&str) -> String) -> Self {
        Self {
            behavior: Behavior::Transform(transform),
            calls: Arc::default(),
        }
    }

    /// Echo the request content back unchanged.
    pub fn echo() -> Self {
        Self::with_transform(str::to_string)
    }

    /// Fail every call with an IO error carrying `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            behavior: Behavior::Fail(reason.into()),
            calls: Arc::default(),
        }
    }

    /// Every `(request_id, request)` received so far.
    pub fn calls(&self) -> Vec<(String, WorkerRequest)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

impl WorkerClient for StubClient {
    fn call(&self, request_id: &str, request: WorkerRequest) -> Result<WorkerResponse> {
        self.calls
            .lock()
            .push((request_id.to_string(), request.clone()));

        match &self.behavior {
            Behavior::Transform(f) => Ok(WorkerResponse::new(f(&request.content))),
            Behavior::Fail(reason) => Err(Error::Io(io::Error::other(reason.clone()))),
        }
    }
}
