//! Comment handlers
//!
//! Endpoints for video comments.

use axum::{
    extract::{Path, State},
    Json,
};
use tube_service::{CommentCountResponse, CommentResponse, CommentService, CreateCommentRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List comments on a video, newest first
///
/// GET /api/v1/videos/{video_id}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(video_id): Path<i64>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let service = CommentService::new(state.service_context());
    let comments = service.list(video_id).await?;
    Ok(Json(comments))
}

/// How many comments a video has
///
/// GET /api/v1/videos/{video_id}/comments/count
pub async fn get_comment_count(
    State(state): State<AppState>,
    Path(video_id): Path<i64>,
) -> ApiResult<Json<CommentCountResponse>> {
    let service = CommentService::new(state.service_context());
    let count = service.count(video_id).await?;
    Ok(Json(count))
}

/// Post a comment on a video
///
/// POST /api/v1/videos/{video_id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(video_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CreateCommentRequest>,
) -> ApiResult<Created<CommentResponse>> {
    let service = CommentService::new(state.service_context());
    let comment = service.create(auth.user_id, video_id, request).await?;
    Ok(Created(comment))
}

/// Delete the caller's own comment
///
/// DELETE /api/v1/comments/{comment_id}
pub async fn delete_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(comment_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = CommentService::new(state.service_context());
    service.delete(auth.user_id, comment_id).await?;
    Ok(NoContent)
}
