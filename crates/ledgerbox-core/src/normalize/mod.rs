//! Normalization of raw job exports into typed result envelopes.

pub mod describe;
pub mod envelope;
pub mod validator;

pub use describe::{describe, describe_fields, output_fields, DisplayType, FieldDescription};
pub use envelope::{build, Envelope, JobMeta, RESERVED_KEYS};
pub use validator::{json_type, validate, validate_object};

use serde_json::Value;
use tracing::debug;

use crate::error::{LedgerBoxError, Result};
use crate::models::document::DocumentModel;
use crate::schema::resolve;

/// Normalize a raw export for a model identifier string.
///
/// The raw result is checked before the model id, so a null or non-object
/// payload always reports [`LedgerBoxError::MissingResult`].
pub fn get_results(model_id: &str, raw: &Value) -> Result<Envelope> {
    if !raw.is_object() {
        return Err(LedgerBoxError::MissingResult(json_type(raw).to_string()));
    }
    let model: DocumentModel = model_id.parse()?;
    normalize(model, raw)
}

/// Normalize a raw export for a known model.
pub fn normalize(model: DocumentModel, raw: &Value) -> Result<Envelope> {
    let object = raw
        .as_object()
        .ok_or_else(|| LedgerBoxError::MissingResult(json_type(raw).to_string()))?;

    let meta = JobMeta::from_raw(object)?;
    let record = validate_object(object, resolve(model))?;

    debug!(
        "Normalized {} result for job {}",
        model,
        meta.job_id.as_deref().unwrap_or("<none>")
    );

    Ok(build(record, meta.job_id, meta.status, model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::sample;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_invoice_end_to_end() {
        let raw = json!({
            "jobId": "job-1",
            "status": "success",
            "CustomerName": "ACME",
            "InvoiceTotal": 1100.0,
            "LineItems": [
                { "Items": "Product A", "Amount": 500.0, "Quantity": 5, "UnitPrice": 100.0 }
            ]
        });

        let envelope = get_results("invoice", &raw).unwrap();
        assert_eq!(
            envelope.to_value(),
            json!({
                "id": "job-1",
                "status": "success",
                "jobId": "job-1",
                "model": "invoice",
                "CustomerName": "ACME",
                "InvoiceTotal": 1100.0,
                "LineItems": [
                    { "Items": "Product A", "Amount": 500.0, "Quantity": 5, "UnitPrice": 100.0 }
                ]
            })
        );
    }

    #[test]
    fn test_empty_bank_statement_envelope() {
        let envelope = get_results("bankstatement", &json!({ "jobId": "b-1" })).unwrap();
        let value = envelope.to_value();

        assert_eq!(value["CustomerName"], json!(""));
        assert_eq!(value["LineItems"], json!([]));
        assert!(value.get("status").is_none());
    }

    #[test]
    fn test_unknown_model() {
        assert!(matches!(
            get_results("payslip", &json!({})),
            Err(LedgerBoxError::UnknownModel(m)) if m == "payslip"
        ));
    }

    #[test]
    fn test_missing_result_checked_first() {
        assert!(matches!(
            get_results("payslip", &Value::Null),
            Err(LedgerBoxError::MissingResult(t)) if t == "null"
        ));
        assert!(matches!(
            get_results("invoice", &json!(["a"])),
            Err(LedgerBoxError::MissingResult(t)) if t == "array"
        ));
    }

    #[test]
    fn test_numeric_status_is_stringified() {
        let raw = json!({ "jobId": "j", "status": 200, "InvoiceId": "INV-1" });
        let envelope = get_results("invoice", &raw).unwrap();
        assert_eq!(envelope.get("status"), Some(json!("200")));
        assert_eq!(envelope.get("InvoiceId"), Some(json!("INV-1")));
    }

    #[test]
    fn test_violation_aborts_whole_record() {
        let raw = json!({ "jobId": "j", "CustomerName": "ACME", "InvoiceTotal": "not-a-number" });
        let err = get_results("invoice", &raw).unwrap_err();
        assert_eq!(err.path(), Some("InvoiceTotal"));
        assert!(err.to_string().contains("InvoiceTotal"));
    }

    #[test]
    fn test_samples_normalize_to_themselves() {
        for model in DocumentModel::ALL {
            let sample = sample(model);
            let envelope = normalize(model, &sample).unwrap();
            assert_eq!(envelope.to_value(), sample);
        }
    }
}
