//! Flat field listings for callers that do not know a model's schema.
//!
//! Lists are reported as `string`; the listing is meant for display, not as
//! a faithful type description.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::schema::{resolve_str, FieldType, Schema};

use super::envelope::RESERVED_KEYS;

/// Display type of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayType {
    String,
    Number,
}

/// A `(name, type)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: DisplayType,
}

impl FieldDescription {
    pub fn new(name: impl Into<String>, field_type: DisplayType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// Describe the top-level fields of a schema, in schema order.
pub fn describe(schema: &Schema) -> Vec<FieldDescription> {
    schema
        .fields
        .iter()
        .map(|field| {
            let field_type = match field.field_type {
                FieldType::Number => DisplayType::Number,
                _ => DisplayType::String,
            };
            FieldDescription::new(field.name, field_type)
        })
        .collect()
}

/// Describe the fields produced for a model id.
///
/// Unknown ids yield an empty list and a warning instead of an error.
pub fn describe_fields(model_id: &str) -> Vec<FieldDescription> {
    match resolve_str(model_id) {
        Ok(schema) => describe(schema),
        Err(e) => {
            warn!("Unable to generate dynamic fields: {}", e);
            Vec::new()
        }
    }
}

/// Envelope keys followed by the model's fields.
pub fn output_fields(model_id: &str) -> Vec<FieldDescription> {
    RESERVED_KEYS
        .iter()
        .map(|key| FieldDescription::new(*key, DisplayType::String))
        .chain(describe_fields(model_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::bank_statement::BANK_STATEMENT;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_receipt_fields() {
        let fields = describe_fields("receipt");
        assert!(fields.contains(&FieldDescription::new("Total", DisplayType::Number)));
        assert!(fields.contains(&FieldDescription::new("MerchantName", DisplayType::String)));
        assert!(fields.contains(&FieldDescription::new("Items", DisplayType::String)));
        assert_eq!(fields.len(), 12);
    }

    #[test]
    fn test_unknown_model_is_empty() {
        assert!(describe_fields("unknown-model").is_empty());
    }

    #[test]
    fn test_bank_statement_is_all_strings() {
        assert!(describe(&BANK_STATEMENT)
            .iter()
            .all(|f| f.field_type == DisplayType::String));
    }

    #[test]
    fn test_output_fields_start_with_envelope() {
        let fields = output_fields("invoice");
        let head: Vec<_> = fields.iter().take(4).map(|f| f.name.as_str()).collect();
        assert_eq!(head, ["id", "status", "jobId", "model"]);
        assert_eq!(fields.len(), 4 + 36);

        assert_eq!(output_fields("nope").len(), 4);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(FieldDescription::new("Total", DisplayType::Number)).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Total", "type": "number" }));
    }
}
