//! In-memory log capture.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::{EnvFilter, Layer};

use crate::application::RequestContext;
use crate::infrastructure::config::ServiceConfig;
use crate::infrastructure::logger::ServiceLogger;

/// Request id used by [`context`].
pub const TEST_REQUEST_ID: &str = "req-test";

/// JSON log lines written by a [`capture_logger`] logger.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    /// Every captured entry, parsed.
    pub fn entries(&self) -> Vec<Value> {
        let buf = self.buf.lock();
        String::from_utf8_lossy(&buf)
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }

    /// `(stage, reason)` of every entry that has both.
    pub fn stage_reasons(&self) -> Vec<(String, String)> {
        self.entries()
            .iter()
            .filter_map(|e| {
                let fields = e.get("fields")?;
                Some((
                    fields.get("stage")?.as_str()?.to_string(),
                    fields.get("reason")?.as_str()?.to_string(),
                ))
            })
            .collect()
    }

    /// Whether `stage` logged `reason`.
    pub fn contains(&self, stage: &str, reason: &str) -> bool {
        self.stage_reasons()
            .iter()
            .any(|(s, r)| s == stage && r == reason)
    }
}

/// Writer handed out by [`CapturedLogs`].
pub struct CapturedWriter {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl io::Write for CapturedWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter {
            buf: Arc::clone(&self.buf),
        }
    }
}

/// A logger for service `name` that writes JSON lines into memory.
pub fn capture_logger(name: &str) -> (ServiceLogger, CapturedLogs) {
    let logs = CapturedLogs::default();
    let service = ServiceConfig::new(name, "v0.0.0-test", format!("{name}.log"));
    let layer = fmt::layer().json().with_writer(logs.clone()).boxed();
    let logger = ServiceLogger::from_layers(&service, EnvFilter::new("info"), vec![layer]);
    (logger, logs)
}

/// A complete request context around `logger`.
pub fn context(logger: ServiceLogger) -> RequestContext {
    RequestContext::new(TEST_REQUEST_ID, logger)
}
