//! Data models for jobs, documents, and configuration.

pub mod config;
pub mod document;
pub mod job;
pub mod status;

pub use config::LedgerBoxConfig;
pub use document::DocumentModel;
pub use job::UploadResponse;
pub use status::{status_color, DocumentStatus, ReviewStatus, StatusColor};
