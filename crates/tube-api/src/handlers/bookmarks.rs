//! Bookmark handlers
//!
//! Endpoints for saving videos to the caller's library.

use axum::{
    extract::{Path, State},
    Json,
};
use tube_service::{BookmarkResponse, BookmarkService};

use crate::extractors::{AuthUser, OptionalAuthUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle a bookmark on a video
///
/// POST /api/v1/videos/{video_id}/bookmark
pub async fn toggle_bookmark(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(video_id): Path<i64>,
) -> ApiResult<Json<BookmarkResponse>> {
    let service = BookmarkService::new(state.service_context());
    let response = service.toggle(auth.user_id, video_id).await?;
    Ok(Json(response))
}

/// Check whether the caller has bookmarked a video
///
/// GET /api/v1/videos/{video_id}/bookmark
pub async fn get_bookmark(
    State(state): State<AppState>,
    OptionalAuthUser(auth): OptionalAuthUser,
    Path(video_id): Path<i64>,
) -> ApiResult<Json<BookmarkResponse>> {
    let service = BookmarkService::new(state.service_context());
    let response = service
        .check(auth.map(|user| user.user_id), video_id)
        .await?;
    Ok(Json(response))
}
