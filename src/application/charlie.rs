//! Worker B: mask vowels.

use crate::application::RequestContext;
use crate::domain::{text, WorkerRequest, WorkerResponse};
use crate::error::{Error, Result};
use crate::port::WorkerService;

const PACKAGE: &str = "application.charlie";

#[derive(Debug, Clone, Copy, Default)]
pub struct CharlieService;

impl CharlieService {
    pub fn new() -> Self {
        Self
    }

    /// Replace every ASCII vowel with `*`, preserving everything else.
    pub fn transform(&self, ctx: &RequestContext, content: &str) -> Result<String> {
        let logger = ctx.logger()?;
        let stage = logger.stage(format!("{PACKAGE}.transform"));

        let manipulated = text::mask_vowels(content);
        stage.manipulated(&manipulated);
        Ok(manipulated)
    }
}

impl WorkerService for CharlieService {
    fn handle(&self, ctx: &RequestContext, request: WorkerRequest) -> Result<WorkerResponse> {
        let (logger, _) = ctx.require()?;
        let stage = logger.stage(format!("{PACKAGE}.handle"));

        let manipulated = self.transform(ctx, &request.content).map_err(|e| {
            stage.fail(&e);
            Error::Transform
        })?;

        Ok(WorkerResponse::new(manipulated))
    }
}
