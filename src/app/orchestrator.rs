//! Composition root for one orchestrator and its two workers.

use crate::adapter::outbound::LocalClient;
use crate::application::{AlphaService, RequestContext};
use crate::domain::{CompositeRequest, CompositeResponse};
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::infrastructure::logger::ServiceLogger;

const STAGE: &str = "app.handle";

/// The wired application: alpha's logger plus an orchestrator whose workers
/// are reached through [`LocalClient`]s.
pub struct App {
    logger: ServiceLogger,
    alpha: AlphaService,
}

impl App {
    /// Open every service's log sink and wire the clients.
    pub fn build(config: &Config) -> Result<Self> {
        let logger = ServiceLogger::new(&config.alpha, &config.logging)?;
        let bravo = LocalClient::bravo(config)?;
        let charlie = LocalClient::charlie(config)?;

        Ok(Self {
            logger,
            alpha: AlphaService::new(Box::new(bravo), Box::new(charlie)),
        })
    }

    /// Serve one request with a fresh request context.
    ///
    /// A failure is logged through alpha's request logger before it is
    /// returned, including context failures the orchestrator rejects before
    /// opening any stage.
    pub fn handle(&self, request_id: &str, request: CompositeRequest) -> Result<CompositeResponse> {
        let logger = self.logger.with_request(request_id, &request);
        let ctx = RequestContext::new(request_id, logger.clone());
        self.alpha.handle(&ctx, request).map_err(|e| {
            logger.fail(STAGE, &e);
            e
        })
    }

    /// Build and serve a single request.
    pub fn run(config: &Config, request_id: &str, request: CompositeRequest) -> Result<CompositeResponse> {
        Self::build(config)?.handle(request_id, request)
    }
}
