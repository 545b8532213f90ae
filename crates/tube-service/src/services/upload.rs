//! Upload orchestration service
//!
//! Validates uploaded files (extension allow-list, size cap) before
//! handing them to the media store.

use tracing::{info, instrument};

use tube_core::MediaFile;

use crate::dto::UploadResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm"];
const IMAGE_EXTENSIONS: &[&str] = &["jpeg", "jpg", "png", "webp"];

/// Upload orchestration service
pub struct UploadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UploadService<'a> {
    /// Create a new UploadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Push a video file to the CDN, returning its playback URL
    #[instrument(skip(self, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
    pub async fn upload_video(&self, title: &str, file: MediaFile) -> ServiceResult<UploadResponse> {
        validate_file(&file, VIDEO_EXTENSIONS, self.ctx.max_video_size_bytes())?;

        let title = title.trim();
        if title.is_empty() {
            return Err(ServiceError::validation("Title must not be empty"));
        }

        let url = self.ctx.media_store().store_video(title, &file).await?;

        info!(%url, "video stored");
        Ok(UploadResponse { url })
    }

    /// Push an image file to the CDN, returning its public URL
    #[instrument(skip(self, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
    pub async fn upload_image(&self, file: MediaFile) -> ServiceResult<UploadResponse> {
        validate_file(&file, IMAGE_EXTENSIONS, self.ctx.max_image_size_bytes())?;

        let url = self.ctx.media_store().store_image(&file).await?;

        info!(%url, "image stored");
        Ok(UploadResponse { url })
    }
}

fn validate_file(
    file: &MediaFile,
    allowed: &[&str],
    max_bytes: usize,
) -> Result<(), ServiceError> {
    if file.bytes.is_empty() {
        return Err(ServiceError::validation("File is empty"));
    }

    if file.bytes.len() > max_bytes {
        return Err(ServiceError::validation(format!(
            "File exceeds the {} MB limit",
            max_bytes / (1024 * 1024)
        )));
    }

    let ext = file
        .extension()
        .ok_or_else(|| ServiceError::validation("File has no extension"))?;

    if !allowed.contains(&ext.as_str()) {
        return Err(ServiceError::validation(format!(
            "File type .{ext} is not allowed (expected one of: {})",
            allowed.join(", ")
        )));
    }

    Ok(())
}
