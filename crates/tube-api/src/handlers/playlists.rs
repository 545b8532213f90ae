//! Playlist handlers
//!
//! Public playlist browsing plus admin-only management.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tube_service::{
    CreatePlaylistRequest, PlaylistDetailResponse, PlaylistHitResponse, PlaylistResponse,
    PlaylistService, UpdatePlaylistRequest,
};

use crate::extractors::{AdminUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all playlists
///
/// GET /api/v1/playlists
pub async fn list_playlists(State(state): State<AppState>) -> ApiResult<Json<Vec<PlaylistResponse>>> {
    let service = PlaylistService::new(state.service_context());
    let playlists = service.list().await?;
    Ok(Json(playlists))
}

/// Query parameters for playlist search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Search playlists by name
///
/// GET /api/v1/playlists/search?q={query}
pub async fn search_playlists(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Vec<PlaylistHitResponse>>> {
    let service = PlaylistService::new(state.service_context());
    let hits = service.search(params.q.as_deref().unwrap_or_default()).await?;
    Ok(Json(hits))
}

/// Get a playlist by ID
///
/// GET /api/v1/playlists/{playlist_id}
pub async fn get_playlist(
    State(state): State<AppState>,
    Path(playlist_id): Path<i64>,
) -> ApiResult<Json<PlaylistResponse>> {
    let service = PlaylistService::new(state.service_context());
    let playlist = service.get(playlist_id).await?;
    Ok(Json(playlist))
}

/// Get a playlist by slug, with its videos
///
/// GET /api/v1/playlists/slug/{slug}
pub async fn get_playlist_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<PlaylistDetailResponse>> {
    let service = PlaylistService::new(state.service_context());
    let playlist = service.get_by_slug(&slug).await?;
    Ok(Json(playlist))
}

/// Create a playlist (admin only)
///
/// POST /api/v1/playlists
pub async fn create_playlist(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreatePlaylistRequest>,
) -> ApiResult<Created<PlaylistResponse>> {
    let service = PlaylistService::new(state.service_context());
    let playlist = service.create(request).await?;
    Ok(Created(playlist))
}

/// Update a playlist (admin only)
///
/// PATCH /api/v1/playlists/{playlist_id}
pub async fn update_playlist(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(playlist_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdatePlaylistRequest>,
) -> ApiResult<Json<PlaylistResponse>> {
    let service = PlaylistService::new(state.service_context());
    let playlist = service.update(playlist_id, request).await?;
    Ok(Json(playlist))
}

/// Delete a playlist (admin only)
///
/// DELETE /api/v1/playlists/{playlist_id}
pub async fn delete_playlist(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(playlist_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = PlaylistService::new(state.service_context());
    service.delete(playlist_id).await?;
    Ok(NoContent)
}
