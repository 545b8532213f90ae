//! Upload handlers (admin only)
//!
//! Multipart endpoints that push media to the CDN providers and
//! return the public URL.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tube_core::MediaFile;
use tube_service::{UploadResponse, UploadService};

use crate::extractors::AdminUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Upload a video file to the streaming CDN
///
/// POST /api/v1/uploads/video
///
/// Expects a multipart form with a `file` part and an optional `title` part.
/// The title falls back to the uploaded file name.
pub async fn upload_video(
    State(state): State<AppState>,
    _admin: AdminUser,
    multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let (file, title) = read_upload(multipart).await?;
    let title = title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| file.file_name.clone());

    let service = UploadService::new(state.service_context());
    let response = service.upload_video(&title, file).await?;
    Ok(Json(response))
}

/// Upload an image to the image CDN
///
/// POST /api/v1/uploads/image
pub async fn upload_image(
    State(state): State<AppState>,
    _admin: AdminUser,
    multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let (file, _) = read_upload(multipart).await?;

    let service = UploadService::new(state.service_context());
    let response = service.upload_image(file).await?;
    Ok(Json(response))
}

/// Pull the `file` part (and optional `title` part) out of a multipart form
async fn read_upload(mut multipart: Multipart) -> Result<(MediaFile, Option<String>), ApiError> {
    let mut file: Option<MediaFile> = None;
    let mut title: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::InvalidMultipart(e.to_string()))?
    {
        match field.name() {
            Some("file") => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::InvalidMultipart(e.to_string()))?;

                file = Some(MediaFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            Some("title") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::InvalidMultipart(e.to_string()))?;
                title = Some(text);
            }
            _ => {}
        }
    }

    let file = file.ok_or_else(|| ApiError::InvalidMultipart("Missing 'file' part".to_string()))?;
    Ok((file, title))
}
