//! Request and response payloads exchanged between the services.

use serde::{Deserialize, Serialize};

/// Request id used by the sample invocation.
pub const SAMPLE_REQUEST_ID: &str = "1239893491327";

/// Request accepted by the orchestrator.
///
/// The three contents are independent and any of them may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeRequest {
    /// Primary content, prefixed to both merged outputs.
    pub content: String,
    /// Content delegated to the bravo worker. Skipped when empty.
    pub bravo_content: String,
    /// Content delegated to the charlie worker. Skipped when empty.
    pub charlie_content: String,
}

impl CompositeRequest {
    pub fn new(
        content: impl Into<String>,
        bravo_content: impl Into<String>,
        charlie_content: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            bravo_content: bravo_content.into(),
            charlie_content: charlie_content.into(),
        }
    }

    /// The fixed request the binary sends when given no overrides.
    pub fn sample() -> Self {
        Self::new(
            "John Doe",
            "Hello World from Bravo to",
            "Hello World from Charlie to",
        )
    }
}

/// Orchestrator output: the primary content merged with each worker result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompositeResponse {
    pub bravo_manipulated_content: String,
    pub charlie_manipulated_content: String,
}

impl CompositeResponse {
    /// Merge the primary content with both worker outputs.
    ///
    /// A separating space is always inserted, so a skipped worker yields
    /// `"<content> "`.
    pub fn merge(content: &str, bravo: &str, charlie: &str) -> Self {
        Self {
            bravo_manipulated_content: format!("{content} {bravo}"),
            charlie_manipulated_content: format!("{content} {charlie}"),
        }
    }
}

/// Single-string request accepted by a worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerRequest {
    pub content: String,
}

impl WorkerRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// Single-string response returned by a worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerResponse {
    pub manipulated_content: String,
}

impl WorkerResponse {
    pub fn new(manipulated_content: impl Into<String>) -> Self {
        Self {
            manipulated_content: manipulated_content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_separator_for_skipped_worker() {
        let merged = CompositeResponse::merge("John Doe", "", "");
        assert_eq!(merged.bravo_manipulated_content, "John Doe ");
        assert_eq!(merged.charlie_manipulated_content, "John Doe ");
    }

    #[test]
    fn merge_of_empty_everything_is_single_space() {
        let merged = CompositeResponse::merge("", "", "");
        assert_eq!(merged.bravo_manipulated_content, " ");
    }

    #[test]
    fn request_serializes_with_snake_case_fields() {
        let json = serde_json::to_string(&WorkerRequest::new("abc")).unwrap();
        assert_eq!(json, r#"{"content":"abc"}"#);
    }
}
