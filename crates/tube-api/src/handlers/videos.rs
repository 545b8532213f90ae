//! Video handlers
//!
//! Public video browsing and view counting plus admin-only management.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tube_service::{
    CreateVideoRequest, ReactionService, UpdateVideoRequest, VideoResponse, VideoService,
    VideoStatsResponse, ViewCountResponse,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for listing videos
#[derive(Debug, Deserialize)]
pub struct ListVideosParams {
    /// Restrict the listing to one playlist
    #[serde(default)]
    pub playlist_id: Option<i64>,
}

/// List videos, optionally filtered by playlist
///
/// GET /api/v1/videos?playlist_id={id}
pub async fn list_videos(
    State(state): State<AppState>,
    Query(params): Query<ListVideosParams>,
) -> ApiResult<Json<Vec<VideoResponse>>> {
    let service = VideoService::new(state.service_context());
    let videos = service.list(params.playlist_id).await?;
    Ok(Json(videos))
}

/// Query parameters for video search
#[derive(Debug, Deserialize)]
pub struct SearchVideosParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Most recently added videos
///
/// GET /api/v1/videos/latest
pub async fn latest_videos(State(state): State<AppState>) -> ApiResult<Json<Vec<VideoResponse>>> {
    let service = VideoService::new(state.service_context());
    let videos = service.latest().await?;
    Ok(Json(videos))
}

/// Search videos by title
///
/// GET /api/v1/videos/search?q={query}
pub async fn search_videos(
    State(state): State<AppState>,
    Query(params): Query<SearchVideosParams>,
) -> ApiResult<Json<Vec<VideoResponse>>> {
    let service = VideoService::new(state.service_context());
    let videos = service.search(params.q.as_deref().unwrap_or_default()).await?;
    Ok(Json(videos))
}

/// Get a video by ID
///
/// GET /api/v1/videos/{video_id}
pub async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<i64>,
) -> ApiResult<Json<VideoResponse>> {
    let service = VideoService::new(state.service_context());
    let video = service.get(video_id).await?;
    Ok(Json(video))
}

/// Record a view on a video
///
/// POST /api/v1/videos/{video_id}/view
pub async fn record_view(
    State(state): State<AppState>,
    Path(video_id): Path<i64>,
) -> ApiResult<Json<ViewCountResponse>> {
    let service = VideoService::new(state.service_context());
    let counts = service.record_view(video_id).await?;
    Ok(Json(counts))
}

/// Engagement counters for a video
///
/// GET /api/v1/videos/{video_id}/stats
pub async fn get_video_stats(
    State(state): State<AppState>,
    Path(video_id): Path<i64>,
) -> ApiResult<Json<VideoStatsResponse>> {
    let service = ReactionService::new(state.service_context());
    let stats = service.stats(video_id).await?;
    Ok(Json(stats))
}

/// Create a video (admin only)
///
/// POST /api/v1/videos
pub async fn create_video(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateVideoRequest>,
) -> ApiResult<Created<VideoResponse>> {
    let service = VideoService::new(state.service_context());
    let video = service.create(request).await?;
    Ok(Created(video))
}

/// Update a video (admin only)
///
/// PATCH /api/v1/videos/{video_id}
pub async fn update_video(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(video_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateVideoRequest>,
) -> ApiResult<Json<VideoResponse>> {
    let service = VideoService::new(state.service_context());
    let video = service.update(video_id, request).await?;
    Ok(Json(video))
}

/// Delete a video (admin only)
///
/// DELETE /api/v1/videos/{video_id}
pub async fn delete_video(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(video_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = VideoService::new(state.service_context());
    service.delete(video_id).await?;
    Ok(NoContent)
}
