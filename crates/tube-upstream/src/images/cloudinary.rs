//! Cloudinary client
//!
//! Uses unsigned uploads with a preset, so no request signing is needed.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, instrument};

use tube_common::ImageCdnConfig;
use tube_core::{DomainError, MediaFile};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

/// Cloudinary image storage client
#[derive(Clone)]
pub struct CloudinaryClient {
    http: Client,
    config: ImageCdnConfig,
}

impl CloudinaryClient {
    /// Create a new client
    #[must_use]
    pub fn new(http: Client, config: ImageCdnConfig) -> Self {
        Self { http, config }
    }

    /// Upload an image, returning its public HTTPS URL
    #[instrument(skip(self, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
    pub async fn upload(&self, file: &MediaFile) -> Result<String, DomainError> {
        let (cloud_name, upload_preset) = match (
            self.config.cloud_name.as_deref(),
            self.config.upload_preset.as_deref(),
        ) {
            (Some(cloud), Some(preset)) => (cloud, preset),
            _ => {
                return Err(DomainError::Upstream(
                    "image CDN is not configured".to_string(),
                ))
            }
        };

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| DomainError::Upstream(format!("invalid content type: {e}")))?;

        let form = Form::new()
            .part("file", part)
            .text("upload_preset", upload_preset.to_string());

        let response = self
            .http
            .post(format!(
                "https://api.cloudinary.com/v1_1/{cloud_name}/image/upload"
            ))
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("cloudinary request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(DomainError::Upstream(format!(
                "cloudinary returned {}",
                response.status()
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Upstream(format!("cloudinary response invalid: {e}")))?;

        info!("image uploaded");
        Ok(body.secure_url)
    }
}

impl std::fmt::Debug for CloudinaryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudinaryClient")
            .field("configured", &self.config.is_configured())
            .finish_non_exhaustive()
    }
}
