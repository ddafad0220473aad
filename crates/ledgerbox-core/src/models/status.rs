//! Document and review status enumerations used for display.
//!
//! These are presentation helpers only. The normalizer passes the raw
//! `status` string through without checking it against [`DocumentStatus`].

use serde::{Deserialize, Serialize};

/// Processing status of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Processing,
    Success,
    Error,
}

/// Display color for a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Muted,
    Positive,
    Destructive,
}

impl DocumentStatus {
    /// Parse a status case-insensitively. Unknown values yield `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "processing" => Some(DocumentStatus::Processing),
            "success" => Some(DocumentStatus::Success),
            "error" => Some(DocumentStatus::Error),
            _ => None,
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            DocumentStatus::Processing => StatusColor::Muted,
            DocumentStatus::Success => StatusColor::Positive,
            DocumentStatus::Error => StatusColor::Destructive,
        }
    }
}

/// Color for an arbitrary status string; unrecognized values are muted.
pub fn status_color(status: &str) -> StatusColor {
    DocumentStatus::from_str(status)
        .map(|s| s.color())
        .unwrap_or(StatusColor::Muted)
}

/// Human review state of an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Review",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Rejected => "Rejected",
        }
    }

    pub fn color(&self) -> StatusColor {
        match self {
            ReviewStatus::Pending => StatusColor::Muted,
            ReviewStatus::Approved => StatusColor::Positive,
            ReviewStatus::Rejected => StatusColor::Destructive,
        }
    }
}
