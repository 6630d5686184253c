use std::fs;

use serde_json::Value;
use triad::adapter::outbound::LocalClient;
use triad::app::App;
use triad::application::{AlphaService, RequestContext};
use triad::domain::{CompositeRequest, WorkerKind, SAMPLE_REQUEST_ID};
use triad::error::Error;
use triad::infrastructure::logger::ServiceLogger;
use triad::testkit::client::StubClient;
use triad::testkit::config::in_dir;

fn log_entries(path: &std::path::Path) -> Vec<Value> {
    fs::read_to_string(path)
        .expect("read log file")
        .lines()
        .map(|line| serde_json::from_str(line).expect("json log line"))
        .collect()
}

#[test]
fn e2e_sample_request_through_local_workers() {
    let dir = tempfile::tempdir().unwrap();
    let config = in_dir(dir.path());

    let response = App::run(&config, SAMPLE_REQUEST_ID, CompositeRequest::sample()).unwrap();

    assert_eq!(
        response.bravo_manipulated_content,
        "John Doe OT OVARB MORF DLROW OLLEH"
    );
    assert_eq!(
        response.charlie_manipulated_content,
        "John Doe H*ll* W*rld fr*m Ch*rl** t*"
    );
}

#[test]
fn e2e_worker_logs_carry_request_payload() {
    let dir = tempfile::tempdir().unwrap();
    let config = in_dir(dir.path());

    App::run(&config, "req-e2e", CompositeRequest::sample()).unwrap();

    let bravo = log_entries(&config.bravo.log_file);
    assert!(bravo.iter().any(|e| {
        e["span"]["request_data"] == r#"{"content":"Hello World from Bravo to"}"#
    }));
    assert!(bravo
        .iter()
        .any(|e| e["fields"]["manipulated_content"] == "OT OVARB MORF DLROW OLLEH"));

    let alpha = log_entries(&config.alpha.log_file);
    let payload: Value =
        serde_json::from_str(alpha[0]["span"]["request_data"].as_str().unwrap()).unwrap();
    assert_eq!(payload["content"], "John Doe");
    assert_eq!(payload["charlie_content"], "Hello World from Charlie to");
}

#[test]
fn e2e_primary_only_request_touches_no_worker() {
    let dir = tempfile::tempdir().unwrap();
    let config = in_dir(dir.path());

    let response = App::run(&config, "req-1", CompositeRequest::new("John Doe", "", "")).unwrap();

    assert_eq!(response.bravo_manipulated_content, "John Doe ");
    assert_eq!(response.charlie_manipulated_content, "John Doe ");
    assert_eq!(fs::read_to_string(&config.bravo.log_file).unwrap(), "");
    assert_eq!(fs::read_to_string(&config.charlie.log_file).unwrap(), "");
}

#[test]
fn e2e_failing_worker_aborts_with_generic_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = in_dir(dir.path());

    let logger = ServiceLogger::new(&config.alpha, &config.logging).unwrap();
    let bravo = LocalClient::bravo(&config).unwrap();
    let charlie = StubClient::failing("connection refused");
    let alpha = AlphaService::new(Box::new(bravo), Box::new(charlie.clone()));

    let err = alpha
        .handle(
            &RequestContext::new("req-fail", logger),
            CompositeRequest::sample(),
        )
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Downstream {
            worker: WorkerKind::Charlie
        }
    ));
    assert_eq!(err.to_string(), "error while contacting charlie service");
    assert_eq!(charlie.call_count(), 1);

    let alpha_log = fs::read_to_string(&config.alpha.log_file).unwrap();
    assert!(alpha_log.contains("connection refused"));
    assert!(alpha_log.contains(r#""level":"ERROR""#));
}

#[test]
fn e2e_missing_context_for_every_component() {
    let dir = tempfile::tempdir().unwrap();
    let config = in_dir(dir.path());
    let app = App::build(&config).unwrap();

    let err = app.handle("", CompositeRequest::sample()).unwrap_err();
    assert!(matches!(
        err,
        Error::MissingContext {
            field: "request_id"
        }
    ));

    let alpha = AlphaService::new(
        Box::new(StubClient::echo()),
        Box::new(StubClient::echo()),
    );
    let err = alpha
        .handle(&RequestContext::default(), CompositeRequest::sample())
        .unwrap_err();
    assert!(matches!(err, Error::MissingContext { field: "logger" }));
}
