//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tube_core::traits::{CommentRepository, NewComment, RepoResult};
use tube_core::{CommentWithAuthor, DomainError};

use crate::models::CommentWithAuthorModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn list_for_video(
        &self,
        video_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<CommentWithAuthor>> {
        let rows = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            SELECT c.id, c.video_id, c.user_id, c.body,
                   u.name AS author_name, u.phone_number AS author_phone,
                   c.created_at
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.video_id = $1
            ORDER BY c.created_at DESC, c.id DESC
            LIMIT $2
            ",
        )
        .bind(video_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(CommentWithAuthor::from).collect())
    }

    #[instrument(skip(self))]
    async fn count_for_video(&self, video_id: i64) -> RepoResult<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM comments WHERE video_id = $1")
                .bind(video_id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, comment))]
    async fn create(&self, comment: &NewComment) -> RepoResult<CommentWithAuthor> {
        let row = sqlx::query_as::<_, CommentWithAuthorModel>(
            r"
            WITH inserted AS (
                INSERT INTO comments (video_id, user_id, body)
                VALUES ($1, $2, $3)
                RETURNING id, video_id, user_id, body, created_at
            )
            SELECT i.id, i.video_id, i.user_id, i.body,
                   u.name AS author_name, u.phone_number AS author_phone,
                   i.created_at
            FROM inserted i
            JOIN users u ON u.id = i.user_id
            ",
        )
        .bind(comment.video_id)
        .bind(comment.user_id)
        .bind(&comment.body)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            // FK violation means the video (or user) is gone
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return DomainError::VideoNotFound(comment.video_id);
                }
            }
            map_db_error(e)
        })?;

        Ok(CommentWithAuthor::from(row))
    }

    #[instrument(skip(self))]
    async fn delete_own(&self, id: i64, user_id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }
}
