//! Backend file API client.
//!
//! Thin HTTP client over the gallery backend: list the bucket, upload a file
//! as multipart form data, delete an object by key, and fetch a pre-signed
//! view URL directly from storage.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Response;
use serde::Deserialize;

use crate::config::GalleryConfig;
use crate::error::{Error, Result};
use crate::models::FileRecord;
use crate::util::compact_text;

const UPLOAD_FIELD_NAME: &str = "file";
const FALLBACK_MIME_TYPE: &str = "application/octet-stream";

/// Operations the gallery needs from the backend.
#[async_trait]
pub trait FileApi: Send + Sync {
    /// Fetch every stored file, in server order.
    async fn list(&self) -> Result<Vec<FileRecord>>;

    /// Upload file bytes under the given original file name.
    async fn upload(&self, bytes: &[u8], file_name: &str) -> Result<()>;

    /// Remove the object identified by `key`.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Download the object behind a pre-signed view URL.
    async fn fetch_view_url(&self, url: &str) -> Result<Vec<u8>>;
}

/// `reqwest` implementation of [`FileApi`].
#[derive(Debug, Clone)]
pub struct HttpFileApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpFileApi {
    /// Builds a client for the configured API base URL.
    pub fn new(config: &GalleryConfig) -> Result<Self> {
        let base_url = crate::config::normalize_base_url(&config.api_base_url)?;
        let client = reqwest::Client::builder()
            .build()
            .map_err(|error| Error::Config(format!("Failed to construct HTTP client: {error}")))?;
        Ok(Self { base_url, client })
    }

    /// Returns the base URL this client was configured with.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }
}

#[async_trait]
impl FileApi for HttpFileApi {
    async fn list(&self) -> Result<Vec<FileRecord>> {
        let url = self.endpoint("/files");
        tracing::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| Error::Network(format!("List request failed: {error}")))?;
        let response = ensure_success(response, "List").await.map_err(Error::Network)?;

        let payload = response
            .json::<ListPayload>()
            .await
            .map_err(|error| Error::Network(format!("Failed to parse file list: {error}")))?;
        let files = payload.into_files();
        warn_on_duplicate_keys(&files);
        Ok(files)
    }

    async fn upload(&self, bytes: &[u8], file_name: &str) -> Result<()> {
        let url = self.endpoint("/upload");
        let mime_type = mime_guess::from_path(file_name)
            .first_raw()
            .unwrap_or(FALLBACK_MIME_TYPE);
        tracing::debug!(
            "POST {url} ({file_name}, {mime_type}, {} bytes)",
            bytes.len()
        );

        let part = Part::bytes(bytes.to_vec())
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|error| Error::Upload(format!("Invalid content type: {error}")))?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|error| Error::Upload(format!("Upload request failed: {error}")))?;
        ensure_success(response, "Upload")
            .await
            .map_err(Error::Upload)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let url = self.endpoint("/delete");
        tracing::debug!("DELETE {url} ({key})");

        let response = self
            .client
            .delete(&url)
            .json(&serde_json::json!({ "key": key }))
            .send()
            .await
            .map_err(|error| Error::Delete(format!("Delete request failed: {error}")))?;
        ensure_success(response, "Delete")
            .await
            .map_err(Error::Delete)?;
        Ok(())
    }

    async fn fetch_view_url(&self, url: &str) -> Result<Vec<u8>> {
        tracing::debug!("GET view URL");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|error| Error::LinkExpired(format!("Download request failed: {error}")))?;
        let response = ensure_success(response, "Download")
            .await
            .map_err(Error::LinkExpired)?;
        let bytes = response
            .bytes()
            .await
            .map_err(|error| Error::LinkExpired(format!("Failed to read file bytes: {error}")))?;
        Ok(bytes.to_vec())
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListPayload {
    Bare(Vec<FileRecord>),
    Wrapped { files: Vec<FileRecord> },
}

impl ListPayload {
    fn into_files(self) -> Vec<FileRecord> {
        match self {
            Self::Bare(files) | Self::Wrapped { files } => files,
        }
    }
}

async fn ensure_success(
    response: Response,
    operation: &str,
) -> std::result::Result<Response, String> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(format!(
        "{operation} request failed with HTTP {status}: {}",
        compact_text(&body)
    ))
}

fn warn_on_duplicate_keys(files: &[FileRecord]) {
    let mut seen = std::collections::HashSet::with_capacity(files.len());
    for file in files {
        if !seen.insert(file.key.as_str()) {
            tracing::warn!("Backend listed duplicate key {}", file.key);
        }
    }
}
