//! In-process worker client.
//!
//! Stands where a network client would: the orchestrator hands over a
//! request id and a payload, and the worker side builds its own
//! request-scoped logger and context before running the service. Nothing
//! the orchestrator owns crosses the call.

use crate::application::{BravoService, CharlieService, RequestContext};
use crate::domain::{WorkerRequest, WorkerResponse};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::logger::ServiceLogger;
use crate::port::{WorkerClient, WorkerService};

pub struct LocalClient {
    logger: ServiceLogger,
    service: Box<dyn WorkerService>,
}

impl LocalClient {
    /// Wrap `service`, logging through `logger`.
    pub fn new(logger: ServiceLogger, service: Box<dyn WorkerService>) -> Self {
        Self { logger, service }
    }

    /// Client for Worker A, logging to `config.bravo.log_file`.
    pub fn bravo(config: &Config) -> Result<Self> {
        let logger = ServiceLogger::new(&config.bravo, &config.logging)?;
        Ok(Self::new(logger, Box::new(BravoService::new())))
    }

    /// Client for Worker B, logging to `config.charlie.log_file`.
    pub fn charlie(config: &Config) -> Result<Self> {
        let logger = ServiceLogger::new(&config.charlie, &config.logging)?;
        Ok(Self::new(logger, Box::new(CharlieService::new())))
    }
}

impl WorkerClient for LocalClient {
    fn call(&self, request_id: &str, request: WorkerRequest) -> Result<WorkerResponse> {
        let logger = self.logger.with_request(request_id, &request);
        let ctx = RequestContext::new(request_id, logger);
        self.service.handle(&ctx, request)
    }
}
