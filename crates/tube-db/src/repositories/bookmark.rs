//! PostgreSQL implementation of BookmarkRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tube_core::traits::{BookmarkRepository, RepoResult};
use tube_core::{BookmarkedVideo, DomainError};

use crate::models::BookmarkedVideoModel;

use super::error::map_db_error;

/// PostgreSQL implementation of BookmarkRepository
#[derive(Clone)]
pub struct PgBookmarkRepository {
    pool: PgPool,
}

impl PgBookmarkRepository {
    /// Create a new PgBookmarkRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookmarkRepository for PgBookmarkRepository {
    #[instrument(skip(self))]
    async fn toggle(&self, user_id: Uuid, video_id: i64) -> RepoResult<bool> {
        // Try to remove first; nothing removed means it was absent, insert
        let removed = sqlx::query("DELETE FROM bookmarks WHERE user_id = $1 AND video_id = $2")
            .bind(user_id)
            .bind(video_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if removed.rows_affected() == 1 {
            return Ok(false);
        }

        sqlx::query(
            r"
            INSERT INTO bookmarks (user_id, video_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, video_id) DO NOTHING
            ",
        )
        .bind(user_id)
        .bind(video_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return DomainError::VideoNotFound(video_id);
                }
            }
            map_db_error(e)
        })?;

        Ok(true)
    }

    #[instrument(skip(self))]
    async fn exists(&self, user_id: Uuid, video_id: i64) -> RepoResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM bookmarks WHERE user_id = $1 AND video_id = $2)",
        )
        .bind(user_id)
        .bind(video_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(exists)
    }

    #[instrument(skip(self))]
    async fn list_for_user(&self, user_id: Uuid) -> RepoResult<Vec<BookmarkedVideo>> {
        let rows = sqlx::query_as::<_, BookmarkedVideoModel>(
            r"
            SELECT v.id AS video_id, v.title, v.thumbnail_url, v.duration_secs,
                   v.playlist_id, p.name AS playlist_name, p.slug AS playlist_slug,
                   b.created_at AS bookmarked_at
            FROM bookmarks b
            JOIN videos v ON v.id = b.video_id
            LEFT JOIN playlists p ON p.id = v.playlist_id
            WHERE b.user_id = $1
            ORDER BY b.created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(BookmarkedVideo::from).collect())
    }
}
