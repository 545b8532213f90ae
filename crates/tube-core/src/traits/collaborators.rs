//! Outbound collaborator traits - SMS delivery and media storage
//!
//! Implemented by HTTP clients in the upstream crate and by in-memory
//! doubles in tests.

use async_trait::async_trait;

use crate::error::DomainError;
use crate::value_objects::PhoneNumber;

/// Delivers one-time codes out of band
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `code` to `phone`. Returns `false` when delivery was skipped
    /// (no provider configured); hard provider failures are `Err`.
    async fn send_otp(&self, phone: &PhoneNumber, code: &str) -> Result<bool, DomainError>;
}

/// An uploaded file held in memory before it is pushed upstream
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    /// Lowercased extension of the original file name, if any
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

/// Stores media with an external provider and returns public URLs
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Upload a video, returning its playback URL
    async fn store_video(&self, title: &str, file: &MediaFile) -> Result<String, DomainError>;

    /// Upload an image, returning its public URL
    async fn store_image(&self, file: &MediaFile) -> Result<String, DomainError>;

    /// Best-effort removal of a previously stored video
    async fn delete_video(&self, video_url: &str) -> Result<(), DomainError>;
}
