//! HTTP client for the LedgerBox API.
//!
//! One request per call, no retries. Every request carries the API key in the
//! `X-API-Key` header.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, info};

use ledgerbox_core::models::config::{UploadConfig, API_KEY_ENV};
use ledgerbox_core::{DocumentModel, LedgerBoxConfig, UploadResponse};

const AUTH_PATH: &str = "api/protected/auth";
const UPLOAD_PATH: &str = "api/protected/upload";
const EXPORT_PATH: &str = "api/protected/export";

/// A file ready to be sent to the upload endpoint.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub bytes: Vec<u8>,
    pub filename: String,
    pub content_type: String,
}

impl UploadFile {
    /// Read a file from disk, enforcing the configured size limit.
    ///
    /// The filename defaults to the file's own name and the content type is
    /// inferred from the extension when not given.
    pub fn from_path(
        path: &Path,
        filename: Option<String>,
        content_type: Option<String>,
        config: &UploadConfig,
    ) -> anyhow::Result<Self> {
        let size = fs::metadata(path)
            .with_context(|| format!("Cannot read {}", path.display()))?
            .len();
        if size > config.max_upload_bytes {
            anyhow::bail!(
                "{} is {} bytes, larger than the {} byte upload limit",
                path.display(),
                size,
                config.max_upload_bytes
            );
        }

        let filename = match filename {
            Some(name) => name,
            None => path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .ok_or_else(|| anyhow::anyhow!("Cannot derive a filename from {}", path.display()))?,
        };

        let content_type = content_type
            .or_else(|| infer_content_type(&filename).map(str::to_string))
            .unwrap_or_else(|| config.default_content_type.clone());

        Ok(Self {
            bytes: fs::read(path)?,
            filename,
            content_type,
        })
    }
}

/// MIME type for the document formats LedgerBox accepts.
pub fn infer_content_type(filename: &str) -> Option<&'static str> {
    let extension = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())?
        .to_lowercase();

    match extension.as_str() {
        "pdf" => Some("application/pdf"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        _ => None,
    }
}

/// Authenticated LedgerBox API client.
pub struct LedgerBoxClient {
    http: reqwest::Client,
    config: LedgerBoxConfig,
    api_key: String,
}

impl LedgerBoxClient {
    /// Create a client. Fails when no API key is configured.
    pub fn new(config: &LedgerBoxConfig) -> anyhow::Result<Self> {
        let api_key = config.api.api_key.clone().ok_or_else(|| {
            anyhow::anyhow!(
                "No API key configured.\n\n\
                 Set {} or run 'ledgerbox config set api.api_key <key>'.",
                API_KEY_ENV
            )
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api.timeout_secs))
            .user_agent(concat!("ledgerbox/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            config: config.clone(),
            api_key,
        })
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder.header("X-API-Key", &self.api_key)
    }

    /// Check the API key against the auth endpoint.
    pub async fn test_auth(&self) -> anyhow::Result<()> {
        let url = self.config.endpoint(AUTH_PATH);
        debug!("GET {}", url);

        let response = self.authorized(self.http.get(&url)).send().await?;
        ensure_ok(response, "Authentication failed").await?;
        Ok(())
    }

    /// Upload a file and create a processing job.
    ///
    /// Any JSON reply body is accepted and returned unchanged.
    pub async fn upload(&self, file: UploadFile, model: DocumentModel) -> anyhow::Result<UploadResponse> {
        let url = self.config.endpoint(UPLOAD_PATH);
        info!(
            "Uploading {} ({} bytes, {}) with model {}",
            file.filename,
            file.bytes.len(),
            file.content_type,
            model
        );

        let part = Part::bytes(file.bytes)
            .file_name(file.filename)
            .mime_str(&file.content_type)?;
        let form = Form::new().part("files", part);

        let response = self
            .authorized(self.http.post(&url))
            .header("Accept", "application/json")
            .query(&[("model", model.as_str())])
            .multipart(form)
            .send()
            .await?;

        let response = ensure_ok(response, "Upload failed").await?;
        let body = response
            .json::<Value>()
            .await
            .context("Upload response is not JSON")?;
        Ok(UploadResponse::new(body))
    }

    /// Fetch the raw export of a job.
    pub async fn fetch_job_result(&self, job_id: &str) -> anyhow::Result<Value> {
        let url = self.config.endpoint(EXPORT_PATH);
        debug!("GET {}?jobId={}", url, job_id);

        let response = self
            .authorized(self.http.get(&url))
            .query(&[("jobId", job_id)])
            .send()
            .await?;

        let response = ensure_ok(response, "Failed to get job results").await?;
        let body = response
            .json::<Value>()
            .await
            .context("Malformed job results")?;
        Ok(body)
    }
}

async fn ensure_ok(response: Response, what: &str) -> anyhow::Result<Response> {
    let status = response.status();
    if status == StatusCode::OK {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    anyhow::bail!("{}: {} {}", what, status.as_u16(), body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerbox_core::models::config::ApiConfig;
    use ledgerbox_core::LedgerBoxError;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TEST_KEY: &str = "test-key";

    fn client_for(server: &MockServer) -> LedgerBoxClient {
        let config = LedgerBoxConfig {
            api: ApiConfig {
                base_url: server.uri(),
                api_key: Some(TEST_KEY.to_string()),
                ..ApiConfig::default()
            },
            ..LedgerBoxConfig::default()
        };
        LedgerBoxClient::new(&config).unwrap()
    }

    fn pdf_upload() -> UploadFile {
        UploadFile {
            bytes: b"%PDF-1.7".to_vec(),
            filename: "invoice.pdf".to_string(),
            content_type: "application/pdf".to_string(),
        }
    }

    #[test]
    fn test_infer_content_type() {
        assert_eq!(infer_content_type("invoice.pdf"), Some("application/pdf"));
        assert_eq!(infer_content_type("scan.JPEG"), Some("image/jpeg"));
        assert_eq!(infer_content_type("receipt.png"), Some("image/png"));
        assert_eq!(infer_content_type("notes.txt"), None);
        assert_eq!(infer_content_type("noextension"), None);
    }

    #[test]
    fn test_upload_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("statement.bin");
        fs::write(&path, b"%PDF-1.7").unwrap();

        let file = UploadFile::from_path(&path, None, None, &UploadConfig::default()).unwrap();
        assert_eq!(file.filename, "statement.bin");
        assert_eq!(file.content_type, "application/octet-stream");
        assert_eq!(file.bytes, b"%PDF-1.7");
    }

    #[test]
    fn test_upload_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload");
        fs::write(&path, b"data").unwrap();

        let file = UploadFile::from_path(
            &path,
            Some("invoice.pdf".to_string()),
            None,
            &UploadConfig::default(),
        )
        .unwrap();
        assert_eq!(file.content_type, "application/pdf");

        let file = UploadFile::from_path(
            &path,
            Some("invoice.pdf".to_string()),
            Some("text/plain".to_string()),
            &UploadConfig::default(),
        )
        .unwrap();
        assert_eq!(file.content_type, "text/plain");
    }

    #[test]
    fn test_upload_file_too_large() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.pdf");
        fs::write(&path, vec![0u8; 32]).unwrap();

        let config = UploadConfig {
            max_upload_bytes: 16,
            ..UploadConfig::default()
        };
        let err = UploadFile::from_path(&path, None, None, &config).unwrap_err();
        assert!(err.to_string().contains("upload limit"));
    }

    #[test]
    fn test_client_requires_api_key() {
        let config = LedgerBoxConfig::default();
        let err = LedgerBoxClient::new(&config).err().unwrap();
        assert!(err.to_string().contains("No API key configured"));
    }

    #[tokio::test]
    async fn test_auth_sends_api_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/protected/auth"))
            .and(header("X-API-Key", TEST_KEY))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).test_auth().await.unwrap();
    }

    #[tokio::test]
    async fn test_auth_rejected_key() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/protected/auth"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid key"))
            .mount(&server)
            .await;

        let err = client_for(&server).test_auth().await.unwrap_err();
        assert_eq!(err.to_string(), "Authentication failed: 401 invalid key");
    }

    #[tokio::test]
    async fn test_upload_sends_multipart_files_part() {
        let server = MockServer::start().await;
        let reply = json!({
            "message": "Files uploaded successfully",
            "results": { "jobId": "job-12345", "jobStatus": "Processing", "documentIds": ["doc-1"] }
        });
        Mock::given(method("POST"))
            .and(path("/api/protected/upload"))
            .and(header("X-API-Key", TEST_KEY))
            .and(header("Accept", "application/json"))
            .and(query_param("model", "invoice"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .upload(pdf_upload(), DocumentModel::Invoice)
            .await
            .unwrap();
        assert_eq!(response.body(), &reply);
        assert_eq!(response.job_id().as_deref(), Some("job-12345"));

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];

        let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
        assert!(content_type.starts_with("multipart/form-data; boundary="));

        let body = String::from_utf8_lossy(&request.body).to_lowercase();
        assert!(body.contains(r#"name="files""#), "{body}");
        assert!(body.contains(r#"filename="invoice.pdf""#), "{body}");
        assert!(body.contains("content-type: application/pdf"), "{body}");
        assert!(body.contains("%pdf-1.7"), "{body}");
    }

    #[tokio::test]
    async fn test_upload_accepts_numeric_job_id() {
        let server = MockServer::start().await;
        let reply = json!({ "message": "ok", "results": { "jobId": 123, "documentIds": [456] } });
        Mock::given(method("POST"))
            .and(path("/api/protected/upload"))
            .respond_with(ResponseTemplate::new(200).set_body_json(reply.clone()))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .upload(pdf_upload(), DocumentModel::Receipt)
            .await
            .unwrap();
        assert_eq!(response.job_id().as_deref(), Some("123"));
        assert_eq!(response.into_inner(), reply);
    }

    #[tokio::test]
    async fn test_upload_failure_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/protected/upload"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .upload(pdf_upload(), DocumentModel::Invoice)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Upload failed: 500 boom");
    }

    #[tokio::test]
    async fn test_fetch_job_result_sends_job_id() {
        let server = MockServer::start().await;
        let export = json!({ "jobId": "job-7", "status": "success", "Total": 12.5 });
        Mock::given(method("GET"))
            .and(path("/api/protected/export"))
            .and(header("X-API-Key", TEST_KEY))
            .and(query_param("jobId", "job-7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(export.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let raw = client_for(&server).fetch_job_result("job-7").await.unwrap();
        assert_eq!(raw, export);
    }

    #[tokio::test]
    async fn test_fetch_job_result_failure_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/protected/export"))
            .respond_with(ResponseTemplate::new(404).set_body_string("no such job"))
            .mount(&server)
            .await;

        let err = client_for(&server).fetch_job_result("job-0").await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to get job results: 404 no such job");
    }

    #[tokio::test]
    async fn test_non_object_export_is_missing_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/protected/export"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([1, 2])))
            .mount(&server)
            .await;

        let raw = client_for(&server).fetch_job_result("job-1").await.unwrap();
        assert!(matches!(
            ledgerbox_core::normalize(DocumentModel::Receipt, &raw),
            Err(LedgerBoxError::MissingResult(_))
        ));
    }
}
