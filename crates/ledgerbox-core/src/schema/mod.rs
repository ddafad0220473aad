//! Per-model field schemas and the model registry.

pub mod bank_statement;
pub mod field;
pub mod invoice;
pub mod receipt;
mod registry;

pub use field::{FieldDescriptor, FieldType, Policy, Schema};
pub use registry::{resolve, resolve_str, sample};
