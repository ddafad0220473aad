//! Upload acknowledgment returned when a job is created.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response body of `POST /api/protected/upload`.
///
/// The body is kept exactly as the server sent it. Accessors read the usual
/// `{ message, results: { jobId, jobStatus, documentIds } }` shape on a
/// best-effort basis and return `None` when a key is missing or oddly typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadResponse(Value);

impl UploadResponse {
    pub fn new(body: Value) -> Self {
        Self(body)
    }

    /// The reply body, unchanged.
    pub fn body(&self) -> &Value {
        &self.0
    }

    pub fn into_inner(self) -> Value {
        self.0
    }

    /// Human readable confirmation, e.g. "Files uploaded successfully".
    pub fn message(&self) -> Option<&str> {
        self.0.get("message").and_then(Value::as_str)
    }

    /// Identifier to pass to the export endpoint.
    ///
    /// Read from `results.jobId`, falling back to a top-level `jobId`.
    /// Numeric ids are rendered to strings.
    pub fn job_id(&self) -> Option<String> {
        self.results()
            .and_then(|results| results.get("jobId"))
            .or_else(|| self.0.get("jobId"))
            .and_then(scalar_text)
    }

    /// Server-side job status at creation time (usually "Processing").
    pub fn job_status(&self) -> Option<String> {
        self.results()
            .and_then(|results| results.get("jobStatus"))
            .and_then(scalar_text)
    }

    /// Documents attached to the job. Entries that are not ids are skipped.
    pub fn document_ids(&self) -> Vec<String> {
        self.results()
            .and_then(|results| results.get("documentIds"))
            .and_then(Value::as_array)
            .map(|ids| ids.iter().filter_map(scalar_text).collect())
            .unwrap_or_default()
    }

    fn results(&self) -> Option<&Value> {
        self.0.get("results")
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
