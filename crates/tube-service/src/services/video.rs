//! Video catalog service

use tracing::{info, instrument, warn};

use tube_core::traits::NewVideo;
use tube_core::{DomainError, VideoPatch};

use crate::dto::{CreateVideoRequest, UpdateVideoRequest, VideoResponse, ViewCountResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Rows returned by the latest-videos listing
const LATEST_LIMIT: i64 = 10;

/// Search results per query
const SEARCH_LIMIT: i64 = 10;

/// Video catalog service
pub struct VideoService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> VideoService<'a> {
    /// Create a new VideoService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List active videos, optionally scoped to one playlist
    #[instrument(skip(self))]
    pub async fn list(&self, playlist_id: Option<i64>) -> ServiceResult<Vec<VideoResponse>> {
        if let Some(pid) = playlist_id {
            self.ctx
                .playlist_repo()
                .find_by_id(pid)
                .await?
                .ok_or_else(|| ServiceError::not_found("Playlist", pid.to_string()))?;
        }

        let videos = self.ctx.video_repo().list(playlist_id).await?;
        Ok(videos.into_iter().map(VideoResponse::from).collect())
    }

    /// One video by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<VideoResponse> {
        let video = self
            .ctx
            .video_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::VideoNotFound(id))?;

        Ok(VideoResponse::from(video))
    }

    /// Most recently added videos
    #[instrument(skip(self))]
    pub async fn latest(&self) -> ServiceResult<Vec<VideoResponse>> {
        let videos = self.ctx.video_repo().latest(LATEST_LIMIT).await?;
        Ok(videos.into_iter().map(VideoResponse::from).collect())
    }

    /// Search videos by title, case-insensitive, newest first
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> ServiceResult<Vec<VideoResponse>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::validation("Search query is required"));
        }

        let videos = self.ctx.video_repo().search(query, SEARCH_LIMIT).await?;
        Ok(videos.into_iter().map(VideoResponse::from).collect())
    }

    /// Record one view, returning the new counter
    #[instrument(skip(self))]
    pub async fn record_view(&self, id: i64) -> ServiceResult<ViewCountResponse> {
        let view_count = self.ctx.video_repo().increment_views(id).await?;
        Ok(ViewCountResponse {
            video_id: id,
            view_count,
        })
    }

    /// Create a video
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreateVideoRequest) -> ServiceResult<VideoResponse> {
        if let Some(pid) = request.playlist_id {
            self.ctx
                .playlist_repo()
                .find_by_id(pid)
                .await?
                .ok_or_else(|| ServiceError::not_found("Playlist", pid.to_string()))?;
        }

        let video = self
            .ctx
            .video_repo()
            .create(&NewVideo {
                playlist_id: request.playlist_id,
                title: request.title.trim().to_string(),
                description: request.description,
                category: request.category,
                video_url: request.video_url,
                thumbnail_url: request.thumbnail_url,
                duration_secs: request.duration_secs,
                position: request.position.unwrap_or(0),
            })
            .await?;

        info!(video_id = video.id, "video created");
        Ok(VideoResponse::from(video))
    }

    /// Partially update a video
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateVideoRequest) -> ServiceResult<VideoResponse> {
        if let Some(Some(pid)) = request.playlist_id {
            self.ctx
                .playlist_repo()
                .find_by_id(pid)
                .await?
                .ok_or_else(|| ServiceError::not_found("Playlist", pid.to_string()))?;
        }

        let patch = VideoPatch {
            playlist_id: request.playlist_id,
            title: request.title.map(|t| t.trim().to_string()),
            description: request.description,
            category: request.category,
            thumbnail_url: request.thumbnail_url,
            duration_secs: request.duration_secs,
            position: request.position,
            is_active: request.is_active,
        };

        if patch.is_empty() {
            return Err(ServiceError::validation("Nothing to update"));
        }

        let video = self.ctx.video_repo().update(id, &patch).await?;
        Ok(VideoResponse::from(video))
    }

    /// Delete a video and, in the background, its stored media.
    ///
    /// The CDN delete is best-effort and detached: the database row and
    /// its dependents are gone once this returns, and a failed upstream
    /// cleanup only leaves an orphaned object behind.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        let video = self
            .ctx
            .video_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::VideoNotFound(id))?;

        self.ctx.video_repo().delete(id).await?;
        info!(video_id = id, "video deleted");

        let media_store = self.ctx.media_store_arc();
        let video_url = video.video_url;
        tokio::spawn(async move {
            if let Err(e) = media_store.delete_video(&video_url).await {
                warn!(error = %e, %video_url, "CDN cleanup failed");
            }
        });

        Ok(())
    }
}
