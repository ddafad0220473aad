//! Result envelope: a validated record plus job metadata.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{LedgerBoxError, Result};
use crate::models::document::DocumentModel;

use super::validator::{coerce_to_string, json_type};

/// Keys owned by the envelope. They take precedence over schema fields.
pub const RESERVED_KEYS: [&str; 4] = ["id", "status", "jobId", "model"];

/// Job metadata carried alongside an extraction result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobMeta {
    pub job_id: Option<String>,
    pub status: Option<String>,
}

impl JobMeta {
    /// Read `jobId` and `status` from a raw export payload.
    ///
    /// A numeric `jobId` is rendered to a string. `status` is copied through,
    /// with non-string values rendered to text (objects and arrays as compact
    /// JSON). Absent or null keys stay `None` and are left out of the envelope.
    pub fn from_raw(raw: &Map<String, Value>) -> Result<Self> {
        let job_id = match raw.get("jobId") {
            None | Some(Value::Null) => None,
            Some(v @ (Value::String(_) | Value::Number(_))) => coerce_to_string(v),
            Some(other) => return Err(meta_violation("jobId", other)),
        };

        let status = match raw.get("status") {
            None | Some(Value::Null) => None,
            Some(value) => coerce_to_string(value).or_else(|| Some(value.to_string())),
        };

        Ok(Self { job_id, status })
    }
}

fn meta_violation(path: &str, value: &Value) -> LedgerBoxError {
    LedgerBoxError::SchemaViolation {
        path: path.to_string(),
        expected: "string",
        actual: json_type(value),
    }
}

/// Normalized result returned to callers.
///
/// Serializes as a flat object: `id`, `status`, `jobId`, `model`, then the
/// validated fields in schema order. `id` and `jobId` always carry the same
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub job_id: Option<String>,
    pub status: Option<String>,
    pub model: DocumentModel,
    /// Validated fields, never containing a reserved key.
    pub fields: Map<String, Value>,
}

/// Merge a validated record with job metadata.
pub fn build(
    record: Map<String, Value>,
    job_id: Option<String>,
    status: Option<String>,
    model: DocumentModel,
) -> Envelope {
    let fields: Map<String, Value> = record
        .into_iter()
        .filter(|(key, _)| {
            let reserved = RESERVED_KEYS.contains(&key.as_str());
            if reserved {
                debug!("Dropping record field {} shadowed by envelope key", key);
            }
            !reserved
        })
        .collect();

    Envelope {
        job_id,
        status,
        model,
        fields,
    }
}

impl Envelope {
    /// Look up any key of the flattened envelope.
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "id" | "jobId" => self.job_id.clone().map(Value::String),
            "status" => self.status.clone().map(Value::String),
            "model" => Some(Value::String(self.model.to_string())),
            _ => self.fields.get(key).cloned(),
        }
    }

    /// Flatten into a JSON object.
    pub fn to_value(&self) -> Value {
        let mut object = Map::new();
        if let Some(id) = &self.job_id {
            object.insert("id".to_string(), Value::String(id.clone()));
        }
        if let Some(status) = &self.status {
            object.insert("status".to_string(), Value::String(status.clone()));
        }
        if let Some(id) = &self.job_id {
            object.insert("jobId".to_string(), Value::String(id.clone()));
        }
        object.insert("model".to_string(), Value::String(self.model.to_string()));
        for (key, value) in &self.fields {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let meta_len = 1 + self.status.is_some() as usize + 2 * self.job_id.is_some() as usize;
        let mut map = serializer.serialize_map(Some(meta_len + self.fields.len()))?;
        if let Some(id) = &self.job_id {
            map.serialize_entry("id", id)?;
        }
        if let Some(status) = &self.status {
            map.serialize_entry("status", status)?;
        }
        if let Some(id) = &self.job_id {
            map.serialize_entry("jobId", id)?;
        }
        map.serialize_entry("model", &self.model)?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
