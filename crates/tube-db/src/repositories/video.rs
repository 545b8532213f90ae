//! PostgreSQL implementation of VideoRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use tube_core::traits::{NewVideo, RepoResult, VideoRepository};
use tube_core::{DomainError, Video, VideoPatch, VideoStats};

use crate::models::{VideoModel, VideoStatsModel};

use super::error::map_db_error;

const VIDEO_COLUMNS: &str =
    "id, playlist_id, title, description, category, video_url, thumbnail_url, \
     duration_secs, sort_order, is_active, view_count, like_count, dislike_count, \
     created_at, updated_at";

/// PostgreSQL implementation of VideoRepository
#[derive(Clone)]
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    /// Create a new PgVideoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for PgVideoRepository {
    #[instrument(skip(self))]
    async fn list(&self, playlist_id: Option<i64>) -> RepoResult<Vec<Video>> {
        let rows = match playlist_id {
            Some(pid) => {
                sqlx::query_as::<_, VideoModel>(&format!(
                    r"
                    SELECT {VIDEO_COLUMNS} FROM videos
                    WHERE playlist_id = $1 AND is_active
                    ORDER BY sort_order, id
                    "
                ))
                .bind(pid)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, VideoModel>(&format!(
                    "SELECT {VIDEO_COLUMNS} FROM videos WHERE is_active ORDER BY sort_order, id"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Video::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Video>> {
        let row = sqlx::query_as::<_, VideoModel>(&format!(
            "SELECT {VIDEO_COLUMNS} FROM videos WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Video::from))
    }

    #[instrument(skip(self))]
    async fn latest(&self, limit: i64) -> RepoResult<Vec<Video>> {
        let rows = sqlx::query_as::<_, VideoModel>(&format!(
            "SELECT {VIDEO_COLUMNS} FROM videos WHERE is_active \
             ORDER BY created_at DESC, id DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Video::from).collect())
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: i64) -> RepoResult<Vec<Video>> {
        let rows = sqlx::query_as::<_, VideoModel>(&format!(
            r"
            SELECT {VIDEO_COLUMNS} FROM videos
            WHERE title ILIKE $1 AND is_active
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "
        ))
        .bind(format!("%{query}%"))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Video::from).collect())
    }

    #[instrument(skip(self, video))]
    async fn create(&self, video: &NewVideo) -> RepoResult<Video> {
        let row = sqlx::query_as::<_, VideoModel>(&format!(
            r"
            INSERT INTO videos (playlist_id, title, description, category, video_url,
                                thumbnail_url, duration_secs, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {VIDEO_COLUMNS}
            "
        ))
        .bind(video.playlist_id)
        .bind(&video.title)
        .bind(video.description.as_deref())
        .bind(video.category.as_deref())
        .bind(&video.video_url)
        .bind(video.thumbnail_url.as_deref())
        .bind(video.duration_secs)
        .bind(video.position)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Video::from(row))
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: i64, patch: &VideoPatch) -> RepoResult<Video> {
        // playlist_id is tri-state: absent keeps, Some(None) detaches
        let row = sqlx::query_as::<_, VideoModel>(&format!(
            r"
            UPDATE videos
            SET playlist_id = CASE WHEN $2 THEN $3 ELSE playlist_id END,
                title = COALESCE($4, title),
                description = COALESCE($5, description),
                category = COALESCE($6, category),
                thumbnail_url = COALESCE($7, thumbnail_url),
                duration_secs = COALESCE($8, duration_secs),
                sort_order = COALESCE($9, sort_order),
                is_active = COALESCE($10, is_active),
                updated_at = now()
            WHERE id = $1
            RETURNING {VIDEO_COLUMNS}
            "
        ))
        .bind(id)
        .bind(patch.playlist_id.is_some())
        .bind(patch.playlist_id.flatten())
        .bind(patch.title.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.category.as_deref())
        .bind(patch.thumbnail_url.as_deref())
        .bind(patch.duration_secs)
        .bind(patch.position)
        .bind(patch.is_active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Video::from).ok_or(DomainError::VideoNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        // Comments, bookmarks, and reactions go with it via FK cascade
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::VideoNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn increment_views(&self, id: i64) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE videos
            SET view_count = view_count + 1
            WHERE id = $1
            RETURNING view_count
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        count.ok_or(DomainError::VideoNotFound(id))
    }

    #[instrument(skip(self))]
    async fn stats(&self, id: i64) -> RepoResult<Option<VideoStats>> {
        let row = sqlx::query_as::<_, VideoStatsModel>(
            "SELECT id, view_count, like_count, dislike_count FROM videos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(VideoStats::from))
    }
}
