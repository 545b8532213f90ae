//! Bunny Stream client
//!
//! Upload is two-step: create the video object to obtain a GUID, then PUT
//! the raw bytes against it. Playback goes through the library's pull-zone
//! hostname as an HLS playlist URL.

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use tube_common::VideoCdnConfig;
use tube_core::DomainError;

const BUNNY_API_BASE: &str = "https://video.bunnycdn.com/library";

#[derive(Debug, Deserialize)]
struct CreateVideoResponse {
    guid: String,
}

/// Bunny Stream video storage client
#[derive(Clone)]
pub struct BunnyStreamClient {
    http: Client,
    config: VideoCdnConfig,
}

impl BunnyStreamClient {
    /// Create a new client
    #[must_use]
    pub fn new(http: Client, config: VideoCdnConfig) -> Self {
        Self { http, config }
    }

    fn credentials(&self) -> Result<(&str, &str, &str), DomainError> {
        match (
            self.config.api_key.as_deref(),
            self.config.library_id.as_deref(),
            self.config.cdn_hostname.as_deref(),
        ) {
            (Some(key), Some(library), Some(host)) => Ok((key, library, host)),
            _ => Err(DomainError::Upstream(
                "video CDN is not configured".to_string(),
            )),
        }
    }

    /// Create a video object and upload its bytes, returning the playback URL
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn upload(&self, title: &str, bytes: &[u8]) -> Result<String, DomainError> {
        let (api_key, library_id, cdn_hostname) = self.credentials()?;

        let created = self
            .http
            .post(format!("{BUNNY_API_BASE}/{library_id}/videos"))
            .header("AccessKey", api_key)
            .json(&json!({ "title": title }))
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("bunny create failed: {e}")))?;

        if !created.status().is_success() {
            return Err(DomainError::Upstream(format!(
                "bunny create returned {}",
                created.status()
            )));
        }

        let video: CreateVideoResponse = created
            .json()
            .await
            .map_err(|e| DomainError::Upstream(format!("bunny create response invalid: {e}")))?;

        let uploaded = self
            .http
            .put(format!(
                "{BUNNY_API_BASE}/{library_id}/videos/{}",
                video.guid
            ))
            .header("AccessKey", api_key)
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("bunny upload failed: {e}")))?;

        if !uploaded.status().is_success() {
            return Err(DomainError::Upstream(format!(
                "bunny upload returned {}",
                uploaded.status()
            )));
        }

        info!(guid = %video.guid, "video uploaded");
        Ok(format!("https://{cdn_hostname}/{}/playlist.m3u8", video.guid))
    }

    /// Delete a previously uploaded video by its playback URL
    #[instrument(skip(self))]
    pub async fn delete(&self, video_url: &str) -> Result<(), DomainError> {
        let (api_key, library_id, _) = self.credentials()?;

        let guid = Self::guid_from_url(video_url).ok_or_else(|| {
            DomainError::Upstream(format!("not a CDN playback URL: {video_url}"))
        })?;

        let response = self
            .http
            .delete(format!("{BUNNY_API_BASE}/{library_id}/videos/{guid}"))
            .header("AccessKey", api_key)
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("bunny delete failed: {e}")))?;

        // 404 is fine, the object is already gone
        if !response.status().is_success() && response.status().as_u16() != 404 {
            return Err(DomainError::Upstream(format!(
                "bunny delete returned {}",
                response.status()
            )));
        }

        Ok(())
    }

    /// Extract the video GUID from a playback URL
    fn guid_from_url(video_url: &str) -> Option<&str> {
        let rest = video_url.strip_prefix("https://")?;
        let (_, path) = rest.split_once('/')?;
        let (guid, _) = path.split_once('/')?;
        (!guid.is_empty()).then_some(guid)
    }
}

impl std::fmt::Debug for BunnyStreamClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BunnyStreamClient")
            .field("configured", &self.config.is_configured())
            .finish_non_exhaustive()
    }
}
