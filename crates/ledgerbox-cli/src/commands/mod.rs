//! Subcommand implementations.

pub mod auth;
pub mod config;
pub mod fields;
pub mod normalize;
pub mod results;
pub mod sample;
pub mod upload;

use ledgerbox_core::DocumentModel;

/// clap value parser for model identifiers.
pub fn parse_model(s: &str) -> Result<DocumentModel, String> {
    s.parse::<DocumentModel>().map_err(|e| {
        format!("{} (expected one of: invoice, receipt, bankstatement)", e)
    })
}
