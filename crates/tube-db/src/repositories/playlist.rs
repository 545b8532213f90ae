//! PostgreSQL implementation of PlaylistRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tube_core::traits::{NewPlaylist, PlaylistRepository, RepoResult};
use tube_core::{DomainError, Playlist, PlaylistHit, PlaylistPatch};

use crate::models::{PlaylistHitModel, PlaylistModel};

use super::error::{map_db_error, map_unique_violation};

// Playlist rows always come back joined with their live count of
// active videos
const PLAYLIST_SELECT: &str = r"
    SELECT p.id, p.name, p.slug, p.description, p.category, p.thumbnail_url,
           p.display_order, p.is_active,
           COALESCE(v.cnt, 0) AS video_count,
           p.created_at, p.updated_at
    FROM playlists p
    LEFT JOIN (
        SELECT playlist_id, COUNT(*) AS cnt
        FROM videos
        WHERE is_active
        GROUP BY playlist_id
    ) v ON v.playlist_id = p.id
";

/// PostgreSQL implementation of PlaylistRepository
#[derive(Clone)]
pub struct PgPlaylistRepository {
    pool: PgPool,
}

impl PgPlaylistRepository {
    /// Create a new PgPlaylistRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaylistRepository for PgPlaylistRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<Playlist>> {
        let rows = sqlx::query_as::<_, PlaylistModel>(&format!(
            "{PLAYLIST_SELECT} WHERE p.is_active ORDER BY p.display_order, p.created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Playlist::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Playlist>> {
        let row = sqlx::query_as::<_, PlaylistModel>(&format!("{PLAYLIST_SELECT} WHERE p.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(row.map(Playlist::from))
    }

    #[instrument(skip(self))]
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Playlist>> {
        let row =
            sqlx::query_as::<_, PlaylistModel>(&format!(
                "{PLAYLIST_SELECT} WHERE p.slug = $1 AND p.is_active"
            ))
                .bind(slug)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(row.map(Playlist::from))
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: i64) -> RepoResult<Vec<PlaylistHit>> {
        let rows = sqlx::query_as::<_, PlaylistHitModel>(
            r"
            SELECT id, name, slug FROM playlists
            WHERE name ILIKE $1 AND is_active
            ORDER BY name
            LIMIT $2
            ",
        )
        .bind(format!("%{query}%"))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(PlaylistHit::from).collect())
    }

    #[instrument(skip(self, playlist))]
    async fn create(&self, playlist: &NewPlaylist) -> RepoResult<Playlist> {
        let row = sqlx::query_as::<_, PlaylistModel>(
            r"
            INSERT INTO playlists (name, slug, description, category, thumbnail_url,
                                   display_order)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, slug, description, category, thumbnail_url,
                      display_order, is_active,
                      0::BIGINT AS video_count, created_at, updated_at
            ",
        )
        .bind(&playlist.name)
        .bind(&playlist.slug)
        .bind(playlist.description.as_deref())
        .bind(playlist.category.as_deref())
        .bind(playlist.thumbnail_url.as_deref())
        .bind(playlist.display_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            map_unique_violation(e, || DomainError::PlaylistExists(playlist.slug.clone()))
        })?;

        Ok(Playlist::from(row))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: &PlaylistPatch) -> RepoResult<Playlist> {
        // COALESCE keeps the stored value for absent fields
        let updated = sqlx::query(
            r"
            UPDATE playlists
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                category = COALESCE($4, category),
                thumbnail_url = COALESCE($5, thumbnail_url),
                display_order = COALESCE($6, display_order),
                is_active = COALESCE($7, is_active),
                updated_at = now()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.category.as_deref())
        .bind(patch.thumbnail_url.as_deref())
        .bind(patch.display_order)
        .bind(patch.is_active)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if updated.rows_affected() == 0 {
            return Err(DomainError::PlaylistNotFound(id));
        }

        self.find_by_id(id)
            .await?
            .ok_or(DomainError::PlaylistNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // Videos survive with playlist_id nulled by the FK action
        let result = sqlx::query("DELETE FROM playlists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PlaylistNotFound(id));
        }

        Ok(())
    }
}
