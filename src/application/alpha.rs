//! Orchestrator: fans a composite request out to the workers and merges
//! their results with the primary content.
//!
//! Workers are reached only through [`WorkerClient`], so tests can swap in
//! stubs. A worker whose content is empty is not called at all.

use crate::application::RequestContext;
use crate::domain::{CompositeRequest, CompositeResponse, WorkerKind, WorkerRequest};
use crate::error::{Error, Result};
use crate::port::WorkerClient;

const PACKAGE: &str = "application.alpha";

pub struct AlphaService {
    bravo: Box<dyn WorkerClient>,
    charlie: Box<dyn WorkerClient>,
}

impl AlphaService {
    pub fn new(bravo: Box<dyn WorkerClient>, charlie: Box<dyn WorkerClient>) -> Self {
        Self { bravo, charlie }
    }

    /// Entry operation.
    ///
    /// Fails with [`Error::MissingContext`] before doing anything if the
    /// context is incomplete, and with [`Error::Downstream`] if a worker call
    /// fails. No partial response is ever returned.
    pub fn handle(
        &self,
        ctx: &RequestContext,
        request: CompositeRequest,
    ) -> Result<CompositeResponse> {
        let (logger, _) = ctx.require()?;
        let stage = logger.stage(format!("{PACKAGE}.handle"));

        self.business_flow(ctx, &request).map_err(|e| {
            stage.fail(&e);
            e
        })
    }

    fn business_flow(
        &self,
        ctx: &RequestContext,
        request: &CompositeRequest,
    ) -> Result<CompositeResponse> {
        let logger = ctx.logger()?;
        let stage = logger.stage(format!("{PACKAGE}.business_flow"));

        let mut bravo = String::new();
        if !request.bravo_content.is_empty() {
            bravo = self
                .request_to_worker(ctx, WorkerKind::Bravo, &request.bravo_content)
                .map_err(|e| {
                    stage.fail(&e);
                    e
                })?;
        }

        let mut charlie = String::new();
        if !request.charlie_content.is_empty() {
            charlie = self
                .request_to_worker(ctx, WorkerKind::Charlie, &request.charlie_content)
                .map_err(|e| {
                    stage.fail(&e);
                    e
                })?;
        }

        Ok(CompositeResponse::merge(&request.content, &bravo, &charlie))
    }

    fn request_to_worker(
        &self,
        ctx: &RequestContext,
        worker: WorkerKind,
        content: &str,
    ) -> Result<String> {
        let logger = ctx.logger()?;
        let stage = logger.stage(format!("{PACKAGE}.request_to_{worker}"));
        let request_id = ctx.request_id()?;

        let client = match worker {
            WorkerKind::Bravo => &self.bravo,
            WorkerKind::Charlie => &self.charlie,
        };

        client
            .call(request_id, WorkerRequest::new(content))
            .map(|response| response.manipulated_content)
            .map_err(|e| {
                stage.fail(&e);
                Error::Downstream { worker }
            })
    }
}
