//! Configuration structures for the LedgerBox client.

use serde::{Deserialize, Serialize};

use crate::error::{LedgerBoxError, Result};

/// Environment variable that overrides `api.api_key`.
pub const API_KEY_ENV: &str = "LEDGERBOX_API_KEY";

/// Main configuration for the ledgerbox tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerBoxConfig {
    /// API connection configuration.
    pub api: ApiConfig,

    /// Upload configuration.
    pub upload: UploadConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// API connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the LedgerBox service.
    pub base_url: String,

    /// API key sent as `X-API-Key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ledgerbox.io".to_string(),
            api_key: None,
            timeout_secs: 60,
        }
    }
}

/// Upload configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Largest file accepted for upload, in bytes.
    pub max_upload_bytes: u64,

    /// MIME type used when none is given and none can be inferred.
    pub default_content_type: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 10 * 1024 * 1024,
            default_content_type: "application/octet-stream".to_string(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl LedgerBoxConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply environment overrides (currently only the API key).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.trim().is_empty() {
                self.api.api_key = Some(key);
            }
        }
        self
    }

    /// Check values that would make every request fail.
    pub fn validate(&self) -> Result<()> {
        let base = self.api.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(LedgerBoxError::Config(format!(
                "api.base_url must be an http(s) URL, got {:?}",
                self.api.base_url
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(LedgerBoxError::Config(
                "api.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.upload.max_upload_bytes == 0 {
            return Err(LedgerBoxError::Config(
                "upload.max_upload_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Build an endpoint URL from the configured base.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
