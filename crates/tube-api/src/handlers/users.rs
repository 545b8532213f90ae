//! User handlers
//!
//! Endpoints for the signed-in user's profile and library.

use axum::{extract::State, Json};
use tube_service::{
    BookmarkService, BookmarkedVideoResponse, UpdateProfileRequest, UserResponse, UserService,
    VideoResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get the current user's profile
///
/// GET /api/v1/users/@me
pub async fn get_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.me(auth.user_id).await?;
    Ok(Json(user))
}

/// Update the current user's profile
///
/// PATCH /api/v1/users/@me
pub async fn update_current_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.update_profile(auth.user_id, request).await?;
    Ok(Json(user))
}

/// Videos the current user has liked
///
/// GET /api/v1/users/@me/likes
pub async fn get_liked_videos(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<VideoResponse>>> {
    let service = UserService::new(state.service_context());
    let videos = service.liked_videos(auth.user_id).await?;
    Ok(Json(videos))
}

/// Videos the current user has bookmarked
///
/// GET /api/v1/users/@me/bookmarks
pub async fn get_bookmarked_videos(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<BookmarkedVideoResponse>>> {
    let service = BookmarkService::new(state.service_context());
    let videos = service.list(auth.user_id).await?;
    Ok(Json(videos))
}
