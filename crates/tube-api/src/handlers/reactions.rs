//! Reaction handlers
//!
//! Like/dislike toggle endpoints for videos.

use axum::{
    extract::{Path, State},
    Json,
};
use tube_service::{ReactionRequest, ReactionResponse, ReactionService};

use crate::extractors::{AuthUser, OptionalAuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle the caller's reaction on a video
///
/// POST /api/v1/videos/{video_id}/reaction
pub async fn toggle_reaction(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(video_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<ReactionRequest>,
) -> ApiResult<Json<ReactionResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service.toggle(auth.user_id, video_id, request).await?;
    Ok(Json(response))
}

/// Get the caller's reaction plus the video's counters
///
/// GET /api/v1/videos/{video_id}/reaction
pub async fn get_reaction(
    State(state): State<AppState>,
    OptionalAuthUser(auth): OptionalAuthUser,
    Path(video_id): Path<i64>,
) -> ApiResult<Json<ReactionResponse>> {
    let service = ReactionService::new(state.service_context());
    let response = service
        .get(auth.map(|user| user.user_id), video_id)
        .await?;
    Ok(Json(response))
}
