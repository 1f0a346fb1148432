//! Image-upload adapter for a Cloudinary-style object-storage provider.
//!
//! Wraps the provider's unsigned upload endpoint using [`reqwest`]. The
//! upload is a single awaited call bounded by the client-wide timeout; on
//! success the provider's publicly addressable URL is returned.

use std::time::Duration;

use serde::Deserialize;

/// Folder used when the caller gives no hint.
pub const DEFAULT_FOLDER: &str = "form-builder";

/// Configuration for the storage provider, built once at process start.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Provider API root, e.g. `https://api.cloudinary.com`.
    pub base_url: String,
    /// Provider account the uploads land in.
    pub cloud_name: String,
    /// Unsigned upload preset configured on the provider.
    pub upload_preset: String,
    /// Default folder hint for uploads.
    pub folder: String,
    /// Overall deadline for one upload round trip.
    pub timeout_secs: u64,
}

impl StorageConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                      |
    /// |---------------------------|------------------------------|
    /// | `STORAGE_BASE_URL`        | `https://api.cloudinary.com` |
    /// | `STORAGE_CLOUD_NAME`      | `demo`                       |
    /// | `STORAGE_UPLOAD_PRESET`   | `unsigned`                   |
    /// | `STORAGE_UPLOAD_FOLDER`   | `form-builder`               |
    /// | `STORAGE_TIMEOUT_SECS`    | `30`                         |
    pub fn from_env() -> Self {
        let base_url = std::env::var("STORAGE_BASE_URL")
            .unwrap_or_else(|_| "https://api.cloudinary.com".into());
        let cloud_name = std::env::var("STORAGE_CLOUD_NAME").unwrap_or_else(|_| "demo".into());
        let upload_preset =
            std::env::var("STORAGE_UPLOAD_PRESET").unwrap_or_else(|_| "unsigned".into());
        let folder =
            std::env::var("STORAGE_UPLOAD_FOLDER").unwrap_or_else(|_| DEFAULT_FOLDER.into());
        let timeout_secs: u64 = std::env::var("STORAGE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("STORAGE_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url,
            cloud_name,
            upload_preset,
            folder,
            timeout_secs,
        }
    }
}

/// Errors from the storage provider layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout) or the
    /// response body was not the expected JSON.
    #[error("Upload request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("Storage provider error ({status}): {body}")]
    Provider {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// Successful upload response; only the public URL is of interest.
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// HTTP client for the image-upload endpoint.
pub struct ImageStore {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
    folder: String,
}

impl ImageStore {
    /// Build a client from configuration. The request timeout applies to the
    /// whole upload round trip; once initiated an upload runs to completion
    /// or failure, there is no retry.
    pub fn new(config: &StorageConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            upload_url: upload_url(&config.base_url, &config.cloud_name),
            upload_preset: config.upload_preset.clone(),
            folder: config.folder.clone(),
        })
    }

    /// Upload one file, returning the provider's public URL.
    ///
    /// * `bytes` - File content, already read into memory by the caller.
    /// * `filename` - Original filename, forwarded to the provider.
    /// * `folder` - Folder hint; falls back to the configured default.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        filename: String,
        folder: Option<&str>,
    ) -> Result<String, StorageError> {
        let folder = folder.unwrap_or(&self.folder);
        let size = bytes.len();

        let form = reqwest::multipart::Form::new()
            .part("file", reqwest::multipart::Part::bytes(bytes).file_name(filename))
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", folder.to_string());

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        let uploaded: UploadResponse = response.json().await?;
        tracing::info!(size, %folder, url = %uploaded.secure_url, "Image uploaded");
        Ok(uploaded.secure_url)
    }
}

fn upload_url(base_url: &str, cloud_name: &str) -> String {
    format!("{}/v1_1/{}/image/upload", base_url.trim_end_matches('/'), cloud_name)
}
