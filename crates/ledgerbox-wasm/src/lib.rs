//! WASM bindings for LedgerBox result normalization.
//!
//! Lets JavaScript automation hosts normalize job exports and list model
//! fields with the same schemas the CLI uses.

use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

use ledgerbox_core::{DocumentModel, Envelope, FieldDescription};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Serialize to plain JS objects (not `Map`s).
fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn from_js(raw: JsValue) -> Result<Value, JsValue> {
    if raw.is_undefined() || raw.is_null() {
        return Ok(Value::Null);
    }
    serde_wasm_bindgen::from_value(raw).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_model(model: &str) -> Result<DocumentModel, JsValue> {
    model
        .parse::<DocumentModel>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn normalize_value(model: &str, raw: &Value) -> Result<Envelope, String> {
    ledgerbox_core::get_results(model, raw).map_err(|e| e.to_string())
}

/// Validate a raw job export and wrap it in a result envelope.
///
/// Throws the error message on unknown models, non-object payloads and
/// schema violations.
#[wasm_bindgen(js_name = getResults)]
pub fn get_results(model: &str, raw: JsValue) -> Result<JsValue, JsValue> {
    let raw = from_js(raw)?;
    let envelope = normalize_value(model, &raw).map_err(|e| JsValue::from_str(&e))?;
    to_js(&envelope)
}

/// Output fields of a model as `{ name, type }` objects. Empty for unknown models.
#[wasm_bindgen(js_name = describeFields)]
pub fn describe_fields(model: &str) -> Result<JsValue, JsValue> {
    let fields: Vec<FieldDescription> = ledgerbox_core::describe_fields(model);
    to_js(&fields)
}

/// Representative normalized result for a model.
#[wasm_bindgen(js_name = modelSample)]
pub fn model_sample(model: &str) -> Result<JsValue, JsValue> {
    to_js(&ledgerbox_core::sample(parse_model(model)?))
}

/// Model identifiers accepted by `getResults`.
#[wasm_bindgen(js_name = supportedModels)]
pub fn supported_models() -> js_sys::Array {
    DocumentModel::ALL
        .iter()
        .map(|m| JsValue::from_str(m.as_str()))
        .collect()
}

/// Normalizer bound to a single model.
#[wasm_bindgen]
pub struct Normalizer {
    model: DocumentModel,
}

#[wasm_bindgen]
impl Normalizer {
    /// Create a normalizer. Throws on unknown models.
    #[wasm_bindgen(constructor)]
    pub fn new(model: &str) -> Result<Normalizer, JsValue> {
        Ok(Self {
            model: parse_model(model)?,
        })
    }

    /// Model identifier this normalizer validates against.
    #[wasm_bindgen(getter)]
    pub fn model(&self) -> String {
        self.model.to_string()
    }

    /// Validate and wrap a raw export.
    #[wasm_bindgen]
    pub fn normalize(&self, raw: JsValue) -> Result<JsValue, JsValue> {
        let raw = from_js(raw)?;
        let envelope = ledgerbox_core::normalize(self.model, &raw)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&envelope)
    }

    /// Output fields including the envelope keys.
    #[wasm_bindgen]
    pub fn fields(&self) -> Result<JsValue, JsValue> {
        to_js(&ledgerbox_core::output_fields(self.model.as_str()))
    }
}
