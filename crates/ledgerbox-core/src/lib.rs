//! Core library for LedgerBox document extraction results.
//!
//! This crate provides:
//! - Field schemas for the invoice, receipt and bank statement models
//! - A model registry with representative sample outputs
//! - Validation and coercion of raw job exports
//! - Result envelopes and flat field listings for display
//! - Client configuration and upload response models

pub mod error;
pub mod models;
pub mod normalize;
pub mod schema;

pub use error::{LedgerBoxError, Result};
pub use models::{DocumentModel, DocumentStatus, LedgerBoxConfig, UploadResponse};
pub use normalize::{
    describe_fields, get_results, normalize, output_fields, validate, DisplayType, Envelope,
    FieldDescription,
};
pub use schema::{resolve, resolve_str, sample, Schema};
