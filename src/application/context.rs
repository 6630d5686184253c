//! Explicit per-request context.
//!
//! Built fresh for every top-level invocation and passed by reference down
//! the call chain. It is never mutated after construction; the only thing
//! derived from it is a child logger.

use crate::domain::RequestId;
use crate::error::{Error, Result};
use crate::infrastructure::logger::ServiceLogger;

#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    request_id: Option<RequestId>,
    logger: Option<ServiceLogger>,
}

impl RequestContext {
    pub fn new(request_id: impl Into<RequestId>, logger: ServiceLogger) -> Self {
        Self {
            request_id: Some(request_id.into()),
            logger: Some(logger),
        }
    }

    pub fn with_request_id(mut self, request_id: impl Into<RequestId>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn with_logger(mut self, logger: ServiceLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn logger(&self) -> Result<&ServiceLogger> {
        self.logger
            .as_ref()
            .ok_or(Error::MissingContext { field: "logger" })
    }

    /// The request id. An empty id counts as missing.
    pub fn request_id(&self) -> Result<&str> {
        match &self.request_id {
            Some(id) if !id.is_empty() => Ok(id.as_str()),
            _ => Err(Error::MissingContext {
                field: "request_id",
            }),
        }
    }

    /// Both fields at once; the logger is checked first.
    pub fn require(&self) -> Result<(&ServiceLogger, &str)> {
        Ok((self.logger()?, self.request_id()?))
    }
}
