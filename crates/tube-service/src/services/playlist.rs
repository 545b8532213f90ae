//! Playlist service

use tracing::{info, instrument};

use tube_core::traits::NewPlaylist;
use tube_core::{slugify, PlaylistPatch};

use crate::dto::{
    CreatePlaylistRequest, PlaylistDetailResponse, PlaylistHitResponse, PlaylistResponse,
    UpdatePlaylistRequest, VideoResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Search results per query
const SEARCH_LIMIT: i64 = 10;

/// Playlist service
pub struct PlaylistService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlaylistService<'a> {
    /// Create a new PlaylistService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Active playlists in display order
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<PlaylistResponse>> {
        let playlists = self.ctx.playlist_repo().list().await?;
        Ok(playlists.into_iter().map(PlaylistResponse::from).collect())
    }

    /// One playlist by ID
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<PlaylistResponse> {
        let playlist = self
            .ctx
            .playlist_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Playlist", id.to_string()))?;

        Ok(PlaylistResponse::from(playlist))
    }

    /// One playlist by slug, with the videos it contains
    #[instrument(skip(self))]
    pub async fn get_by_slug(&self, slug: &str) -> ServiceResult<PlaylistDetailResponse> {
        let playlist = self
            .ctx
            .playlist_repo()
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| ServiceError::not_found("Playlist", slug))?;

        let videos = self.ctx.video_repo().list(Some(playlist.id)).await?;

        Ok(PlaylistDetailResponse {
            playlist: PlaylistResponse::from(playlist),
            videos: videos.into_iter().map(VideoResponse::from).collect(),
        })
    }

    /// Search playlists by name, case-insensitive
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> ServiceResult<Vec<PlaylistHitResponse>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(ServiceError::validation("Search query is required"));
        }

        let hits = self.ctx.playlist_repo().search(query, SEARCH_LIMIT).await?;
        Ok(hits.into_iter().map(PlaylistHitResponse::from).collect())
    }

    /// Create a playlist; the slug is derived from the name
    #[instrument(skip(self, request))]
    pub async fn create(&self, request: CreatePlaylistRequest) -> ServiceResult<PlaylistResponse> {
        let name = request.name.trim();
        let slug = slugify(name);
        if slug.is_empty() {
            return Err(ServiceError::validation(
                "Name must contain at least one alphanumeric character",
            ));
        }

        let playlist = self
            .ctx
            .playlist_repo()
            .create(&NewPlaylist {
                name: name.to_string(),
                slug: slug.clone(),
                description: request.description,
                category: request.category,
                thumbnail_url: request.thumbnail_url,
                display_order: request.display_order.unwrap_or(0),
            })
            .await?;

        info!(playlist_id = playlist.id, %slug, "playlist created");
        Ok(PlaylistResponse::from(playlist))
    }

    /// Partially update a playlist
    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        id: i64,
        request: UpdatePlaylistRequest,
    ) -> ServiceResult<PlaylistResponse> {
        let patch = PlaylistPatch {
            name: request.name,
            description: request.description,
            category: request.category,
            thumbnail_url: request.thumbnail_url,
            display_order: request.display_order,
            is_active: request.is_active,
        };

        if patch.is_empty() {
            return Err(ServiceError::validation("Nothing to update"));
        }

        let playlist = self.ctx.playlist_repo().update(id, &patch).await?;
        Ok(PlaylistResponse::from(playlist))
    }

    /// Delete a playlist; its videos are detached, not removed
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.playlist_repo().delete(id).await?;
        info!(playlist_id = id, "playlist deleted");
        Ok(())
    }
}
