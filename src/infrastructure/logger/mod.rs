//! Per-service structured loggers.
//!
//! Every service writes to its own file, so instead of installing one global
//! subscriber each [`ServiceLogger`] owns a [`Dispatch`] and enters it only
//! while logging. A logger carries a span: the root `service` span tags
//! entries with pid, name and version; [`ServiceLogger::with_request`] derives
//! a child `request` span that adds the request id and payload. Both spans
//! are created at error level so no accepted filter can disable them.

mod rolling;

use std::fmt;
use std::io::{self, IsTerminal};

use serde::Serialize;
use tracing::{dispatcher, error, info, span, Dispatch, Level, Span};
use tracing_subscriber::fmt as tfmt;
use tracing_subscriber::layer::{Layered, SubscriberExt};
use tracing_subscriber::{EnvFilter, Layer, Registry};

use crate::error::Result;
use crate::infrastructure::config::{LoggingConfig, ServiceConfig};

pub use rolling::{RollingFile, RollingFileGuard, RollingFileWriter};

/// Subscriber stack that output layers are attached to.
pub type LogBase = Layered<EnvFilter, Registry>;

/// A boxed output layer for [`ServiceLogger::from_layers`].
pub type LogLayer = Box<dyn Layer<LogBase> + Send + Sync>;

#[derive(Debug, Clone)]
pub struct ServiceLogger {
    dispatch: Dispatch,
    span: Span,
}

impl ServiceLogger {
    /// Build the logger for one service: JSON lines to its rotating log
    /// file, plus a stderr mirror when `logging.console` is set.
    pub fn new(service: &ServiceConfig, logging: &LoggingConfig) -> Result<Self> {
        let file = RollingFile::open(
            &service.log_file,
            logging.max_file_bytes,
            logging.max_backups,
        )?;

        let mut layers: Vec<LogLayer> = vec![tfmt::layer()
            .json()
            .with_writer(RollingFileWriter::new(file))
            .boxed()];

        if logging.console {
            let console: LogLayer = if service.mode.is_structured() {
                tfmt::layer().json().with_writer(io::stderr).boxed()
            } else {
                tfmt::layer()
                    .with_ansi(io::stderr().is_terminal())
                    .with_writer(io::stderr)
                    .boxed()
            };
            layers.push(console);
        }

        Ok(Self::from_layers(service, logging.filter()?, layers))
    }

    /// Build a logger over arbitrary output layers.
    pub fn from_layers(service: &ServiceConfig, filter: EnvFilter, layers: Vec<LogLayer>) -> Self {
        let subscriber = tracing_subscriber::registry().with(filter).with(layers);
        let dispatch = Dispatch::new(subscriber);
        let span = dispatcher::with_default(&dispatch, || {
            span!(
                Level::ERROR,
                "service",
                service_pid = std::process::id(),
                service_name = %service.name,
                service_version = %service.version,
            )
        });
        Self { dispatch, span }
    }

    /// Derive a child logger scoped to one request.
    pub fn with_request<T: Serialize>(&self, request_id: &str, payload: &T) -> Self {
        let request_data = serde_json::to_string(payload)
            .unwrap_or_else(|e| format!("<unserializable: {e}>"));
        let span = dispatcher::with_default(&self.dispatch, || {
            span!(
                parent: &self.span,
                Level::ERROR,
                "request",
                request_id = %request_id,
                request_data = %request_data,
            )
        });
        Self {
            dispatch: self.dispatch.clone(),
            span,
        }
    }

    /// Run `f` with this logger's dispatcher and span active.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, || self.span.in_scope(f))
    }

    /// Log `cause` as the failure of `stage` at error level.
    pub fn fail<E: fmt::Display + ?Sized>(&self, stage: &str, cause: &E) {
        self.in_scope(|| error!(stage = %stage, reason = %cause));
    }

    /// Log the start of `name` now and its end when the guard drops.
    pub fn stage(&self, name: impl Into<String>) -> StageGuard<'_> {
        let name = name.into();
        self.in_scope(|| info!(stage = %name, reason = "execution started"));
        StageGuard { logger: self, name }
    }
}

/// Start/end bracket for one stage. See [`ServiceLogger::stage`].
pub struct StageGuard<'a> {
    logger: &'a ServiceLogger,
    name: String,
}

impl StageGuard<'_> {
    /// Log the underlying cause of a failure at error level.
    pub fn fail<E: fmt::Display + ?Sized>(&self, cause: &E) {
        self.logger.fail(&self.name, cause);
    }

    /// Log a stage's output.
    pub fn manipulated(&self, content: &str) {
        self.logger
            .in_scope(|| info!(stage = %self.name, manipulated_content = %content));
    }
}

impl Drop for StageGuard<'_> {
    fn drop(&mut self) {
        self.logger
            .in_scope(|| info!(stage = %self.name, reason = "execution ended"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorkerRequest;

    fn file_config(dir: &tempfile::TempDir) -> (ServiceConfig, LoggingConfig) {
        let service = ServiceConfig::new("bravo", "v2.0.0", dir.path().join("svc.b.log"));
        let logging = LoggingConfig {
            console: false,
            ..LoggingConfig::default()
        };
        (service, logging)
    }

    fn lines(path: &std::path::Path) -> Vec<serde_json::Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn file_entries_carry_service_and_request_fields() {
        let dir = tempfile::tempdir().unwrap();
        let (service, logging) = file_config(&dir);

        let logger = ServiceLogger::new(&service, &logging)
            .unwrap()
            .with_request("req-1", &WorkerRequest::new("abc"));
        drop(logger.stage("application.bravo.handle"));

        let entries = lines(&service.log_file);
        assert_eq!(entries.len(), 2);

        let first = &entries[0];
        assert_eq!(first["fields"]["stage"], "application.bravo.handle");
        assert_eq!(first["fields"]["reason"], "execution started");
        assert_eq!(first["span"]["request_id"], "req-1");
        assert_eq!(first["span"]["request_data"], r#"{"content":"abc"}"#);
        assert_eq!(first["spans"][0]["service_name"], "bravo");
        assert_eq!(first["spans"][0]["service_version"], "v2.0.0");
        assert_eq!(first["spans"][0]["service_pid"], std::process::id());

        assert_eq!(entries[1]["fields"]["reason"], "execution ended");
    }

    #[test]
    fn failure_logged_at_error_level() {
        let dir = tempfile::tempdir().unwrap();
        let (service, logging) = file_config(&dir);
        let logger = ServiceLogger::new(&service, &logging).unwrap();

        {
            let stage = logger.stage("application.bravo.transform");
            stage.fail("boom");
        }

        let entries = lines(&service.log_file);
        let failure = &entries[1];
        assert_eq!(failure["level"], "ERROR");
        assert_eq!(failure["fields"]["reason"], "boom");
    }

    #[test]
    fn loggers_do_not_share_files() {
        let dir = tempfile::tempdir().unwrap();
        let logging = LoggingConfig {
            console: false,
            ..LoggingConfig::default()
        };
        let a = ServiceConfig::new("alpha", "v1", dir.path().join("a.log"));
        let b = ServiceConfig::new("bravo", "v2", dir.path().join("b.log"));

        let alpha = ServiceLogger::new(&a, &logging).unwrap();
        let bravo = ServiceLogger::new(&b, &logging).unwrap();
        drop(alpha.stage("alpha.stage"));
        drop(bravo.stage("bravo.stage"));

        let a_entries = lines(&a.log_file);
        let b_entries = lines(&b.log_file);
        assert!(a_entries.iter().all(|e| e["fields"]["stage"] == "alpha.stage"));
        assert!(b_entries.iter().all(|e| e["fields"]["stage"] == "bravo.stage"));
    }

    #[test]
    fn level_filter_drops_info() {
        let dir = tempfile::tempdir().unwrap();
        let (service, mut logging) = file_config(&dir);
        logging.level = "error".into();

        let logger = ServiceLogger::from_layers(
            &service,
            EnvFilter::new(&logging.level),
            vec![tfmt::layer()
                .json()
                .with_writer(RollingFileWriter::new(
                    RollingFile::open(&service.log_file, 1024 * 1024, 1).unwrap(),
                ))
                .boxed()],
        );
        {
            let stage = logger.stage("quiet");
            stage.fail("loud");
        }

        let entries = lines(&service.log_file);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["fields"]["reason"], "loud");
    }

    #[test]
    fn tags_survive_restrictive_level() {
        let dir = tempfile::tempdir().unwrap();
        let (service, mut logging) = file_config(&dir);
        logging.level = "warn".into();

        let logger = ServiceLogger::new(&service, &logging)
            .unwrap()
            .with_request("req-9", &WorkerRequest::new("abc"));
        {
            let stage = logger.stage("application.bravo.transform");
            stage.fail("boom");
        }

        let entries = lines(&service.log_file);
        assert_eq!(entries.len(), 1);
        let entry = &entries[0];
        assert_eq!(entry["level"], "ERROR");
        assert_eq!(entry["fields"]["reason"], "boom");
        assert_eq!(entry["span"]["request_id"], "req-9");
        assert_eq!(entry["span"]["request_data"], r#"{"content":"abc"}"#);
        assert_eq!(entry["spans"][0]["service_name"], "bravo");
        assert_eq!(entry["spans"][0]["service_version"], "v2.0.0");
        assert_eq!(entry["spans"][0]["service_pid"], std::process::id());
    }

    #[test]
    fn logger_level_failure_carries_request_tags() {
        let dir = tempfile::tempdir().unwrap();
        let (service, logging) = file_config(&dir);

        ServiceLogger::new(&service, &logging)
            .unwrap()
            .with_request("req-3", &WorkerRequest::new("x"))
            .fail("app.handle", "sink gone");

        let entries = lines(&service.log_file);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["fields"]["stage"], "app.handle");
        assert_eq!(entries[0]["fields"]["reason"], "sink gone");
        assert_eq!(entries[0]["span"]["request_id"], "req-3");
    }
}
