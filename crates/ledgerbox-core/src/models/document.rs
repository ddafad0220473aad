//! Document model identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LedgerBoxError;

/// Extraction model used to process a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentModel {
    /// Supplier invoices.
    Invoice,
    /// Point-of-sale receipts.
    Receipt,
    /// Bank account statements.
    #[serde(rename = "bankstatement")]
    BankStatement,
}

impl DocumentModel {
    /// All supported models, in the order offered to users.
    pub const ALL: [DocumentModel; 3] = [
        DocumentModel::Invoice,
        DocumentModel::Receipt,
        DocumentModel::BankStatement,
    ];

    /// Wire identifier used by the API (`model` query parameter).
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentModel::Invoice => "invoice",
            DocumentModel::Receipt => "receipt",
            DocumentModel::BankStatement => "bankstatement",
        }
    }
}

impl fmt::Display for DocumentModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentModel {
    type Err = LedgerBoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invoice" => Ok(DocumentModel::Invoice),
            "receipt" => Ok(DocumentModel::Receipt),
            "bankstatement" => Ok(DocumentModel::BankStatement),
            other => Err(LedgerBoxError::UnknownModel(other.to_string())),
        }
    }
}
