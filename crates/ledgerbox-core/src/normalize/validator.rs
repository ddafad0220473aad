//! Schema-driven validation and coercion of raw extraction results.
//!
//! Validation is all-or-nothing: the first field that cannot be reconciled
//! with its descriptor aborts the whole record with a
//! [`LedgerBoxError::SchemaViolation`]. Keys that the schema does not name
//! are dropped.

use serde_json::{Map, Number, Value};
use tracing::debug;

use crate::error::{LedgerBoxError, Result};
use crate::schema::{FieldDescriptor, FieldType, Policy, Schema};

/// Validate a raw result against a schema.
///
/// `raw` must be a JSON object; anything else fails with
/// [`LedgerBoxError::MissingResult`] before any field is inspected.
pub fn validate(raw: &Value, schema: &Schema) -> Result<Map<String, Value>> {
    let object = raw
        .as_object()
        .ok_or_else(|| LedgerBoxError::MissingResult(json_type(raw).to_string()))?;
    validate_object(object, schema)
}

/// Validate an already-unwrapped JSON object against a schema.
pub fn validate_object(object: &Map<String, Value>, schema: &Schema) -> Result<Map<String, Value>> {
    let record = validate_record(object, schema, "")?;
    debug!(
        "Validated {} record: {} of {} fields present",
        schema.name,
        record.len(),
        schema.len()
    );
    Ok(record)
}

fn validate_record(
    object: &Map<String, Value>,
    schema: &Schema,
    prefix: &str,
) -> Result<Map<String, Value>> {
    let mut record = Map::new();

    for field in schema.fields {
        let path = if prefix.is_empty() {
            field.name.to_string()
        } else {
            format!("{}.{}", prefix, field.name)
        };

        match object.get(field.name).filter(|v| !v.is_null()) {
            Some(value) => {
                record.insert(field.name.to_string(), validate_value(value, field, &path)?);
            }
            None if field.policy == Policy::DefaultOnMissing => {
                record.insert(field.name.to_string(), zero_value(&field.field_type));
            }
            None => {}
        }
    }

    Ok(record)
}

fn validate_value(value: &Value, field: &FieldDescriptor, path: &str) -> Result<Value> {
    match field.field_type {
        FieldType::String if field.coerce => coerce_to_string(value)
            .map(Value::String)
            .ok_or_else(|| violation(path, "string, number or boolean", value)),
        FieldType::String => match value {
            Value::String(_) => Ok(value.clone()),
            _ => Err(violation(path, "string", value)),
        },
        FieldType::Number => match value {
            Value::Number(_) => Ok(value.clone()),
            _ => Err(violation(path, "number", value)),
        },
        FieldType::StringList => {
            let items = value
                .as_array()
                .ok_or_else(|| violation(path, field.field_type.expected(), value))?;

            items
                .iter()
                .enumerate()
                .map(|(i, item)| match item {
                    Value::String(_) | Value::Null => Ok(item.clone()),
                    _ => Err(violation(&format!("{}[{}]", path, i), "string", item)),
                })
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        }
        FieldType::Records(nested) => {
            let items = value
                .as_array()
                .ok_or_else(|| violation(path, field.field_type.expected(), value))?;

            items
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let item_path = format!("{}[{}]", path, i);
                    let object = item
                        .as_object()
                        .ok_or_else(|| violation(&item_path, "object", item))?;
                    validate_record(object, nested, &item_path).map(Value::Object)
                })
                .collect::<Result<Vec<_>>>()
                .map(Value::Array)
        }
    }
}

fn zero_value(field_type: &FieldType) -> Value {
    if field_type.is_list() {
        Value::Array(Vec::new())
    } else {
        Value::String(String::new())
    }
}

/// Render a scalar as a string. Objects and arrays are not coercible.
pub(crate) fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(render_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Render a number the way JavaScript's `String(n)` does: integral floats
/// lose their fractional part (`1100.0` -> `"1100"`) and magnitudes outside
/// `[1e-6, 1e21)` switch to exponent form (`1e21` -> `"1e+21"`).
fn render_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.is_finite() && !(1e-6..1e21).contains(&f.abs()) => exponent_form(f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

fn exponent_form(f: f64) -> String {
    let text = format!("{:e}", f);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

fn violation(path: &str, expected: &'static str, actual: &Value) -> LedgerBoxError {
    LedgerBoxError::SchemaViolation {
        path: path.to_string(),
        expected,
        actual: json_type(actual),
    }
}

/// JSON type name of a value.
pub fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
