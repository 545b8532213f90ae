//! Media gateway
//!
//! Combines the video and image clients behind the single `MediaStore`
//! trait the service layer depends on.

use async_trait::async_trait;
use reqwest::Client;

use tube_common::{ImageCdnConfig, VideoCdnConfig};
use tube_core::traits::MediaStore;
use tube_core::{DomainError, MediaFile};

use crate::cdn::BunnyStreamClient;
use crate::images::CloudinaryClient;

/// Routes video storage to Bunny Stream and images to Cloudinary
#[derive(Debug, Clone)]
pub struct MediaGateway {
    videos: BunnyStreamClient,
    images: CloudinaryClient,
}

impl MediaGateway {
    /// Create a gateway sharing one HTTP client across both providers
    #[must_use]
    pub fn new(http: Client, video_cdn: VideoCdnConfig, image_cdn: ImageCdnConfig) -> Self {
        Self {
            videos: BunnyStreamClient::new(http.clone(), video_cdn),
            images: CloudinaryClient::new(http, image_cdn),
        }
    }
}

#[async_trait]
impl MediaStore for MediaGateway {
    async fn store_video(&self, title: &str, file: &MediaFile) -> Result<String, DomainError> {
        self.videos.upload(title, &file.bytes).await
    }

    async fn store_image(&self, file: &MediaFile) -> Result<String, DomainError> {
        self.images.upload(file).await
    }

    async fn delete_video(&self, video_url: &str) -> Result<(), DomainError> {
        self.videos.delete(video_url).await
    }
}
