//! Error types for the ledgerbox-core library.

use thiserror::Error;

/// Main error type for the ledgerbox library.
#[derive(Error, Debug)]
pub enum LedgerBoxError {
    /// The model identifier is not one of `invoice`, `receipt`, `bankstatement`.
    #[error("Invalid model: {0}")]
    UnknownModel(String),

    /// A field in the raw result does not match the resolved schema.
    #[error("schema violation at {path}: expected {expected}, got {actual}")]
    SchemaViolation {
        /// Field path, e.g. `LineItems[2].Amount`.
        path: String,
        /// Expected type as described by the schema.
        expected: &'static str,
        /// JSON type of the value actually received.
        actual: &'static str,
    },

    /// The raw result is absent, null, or not an object.
    #[error("Unexpected job results format: {0}")]
    MissingResult(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LedgerBoxError {
    /// Field path of a schema violation, if this is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            LedgerBoxError::SchemaViolation { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Result type for the ledgerbox library.
pub type Result<T> = std::result::Result<T, LedgerBoxError>;
