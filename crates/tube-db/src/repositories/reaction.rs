//! PostgreSQL implementation of ReactionRepository
//!
//! The toggle runs in a single transaction: the previous reaction row is
//! read under `FOR UPDATE`, the transition is computed, and the row plus
//! the video's denormalized counters are adjusted before commit. Two
//! concurrent toggles for the same (user, video) serialize on the row
//! lock, so counters can never drift from reaction rows.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;
use uuid::Uuid;

use tube_core::traits::{ReactionRepository, RepoResult};
use tube_core::{toggle_transition, DomainError, ReactionKind, VideoStats};

use crate::models::VideoStatsModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn previous_reaction(
        tx: &mut Transaction<'_, Postgres>,
        user_id: Uuid,
        video_id: i64,
    ) -> RepoResult<Option<ReactionKind>> {
        let stored = sqlx::query_scalar::<_, String>(
            r"
            SELECT reaction_type FROM user_video_reaction
            WHERE user_id = $1 AND video_id = $2
            FOR UPDATE
            ",
        )
        .bind(user_id)
        .bind(video_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_db_error)?;

        stored.as_deref().map(ReactionKind::parse).transpose()
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn toggle(
        &self,
        user_id: Uuid,
        video_id: i64,
        desired: ReactionKind,
    ) -> RepoResult<(VideoStats, Option<ReactionKind>)> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Lock the video row first so the counter update cannot deadlock
        // against a concurrent toggle locking rows in the opposite order
        let exists = sqlx::query_scalar::<_, i64>("SELECT id FROM videos WHERE id = $1 FOR UPDATE")
            .bind(video_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if exists.is_none() {
            return Err(DomainError::VideoNotFound(video_id));
        }

        let prev = Self::previous_reaction(&mut tx, user_id, video_id).await?;
        let transition = toggle_transition(prev, desired);

        match transition.stored {
            None => {
                sqlx::query(
                    "DELETE FROM user_video_reaction WHERE user_id = $1 AND video_id = $2",
                )
                .bind(user_id)
                .bind(video_id)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
            Some(kind) => {
                sqlx::query(
                    r"
                    INSERT INTO user_video_reaction (user_id, video_id, reaction_type)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (user_id, video_id) DO UPDATE SET
                        reaction_type = EXCLUDED.reaction_type,
                        created_at = now()
                    ",
                )
                .bind(user_id)
                .bind(video_id)
                .bind(kind.as_str())
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
            }
        }

        // GREATEST guards against going negative if counters were ever
        // repaired by hand
        let stats = sqlx::query_as::<_, VideoStatsModel>(
            r"
            UPDATE videos
            SET like_count = GREATEST(like_count + $2, 0),
                dislike_count = GREATEST(dislike_count + $3, 0)
            WHERE id = $1
            RETURNING id, view_count, like_count, dislike_count
            ",
        )
        .bind(video_id)
        .bind(i64::from(transition.like_delta))
        .bind(i64::from(transition.dislike_delta))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok((VideoStats::from(stats), transition.stored))
    }

    #[instrument(skip(self))]
    async fn find(&self, user_id: Uuid, video_id: i64) -> RepoResult<Option<ReactionKind>> {
        let stored = sqlx::query_scalar::<_, String>(
            r"
            SELECT reaction_type FROM user_video_reaction
            WHERE user_id = $1 AND video_id = $2
            ",
        )
        .bind(user_id)
        .bind(video_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        stored.as_deref().map(ReactionKind::parse).transpose()
    }

    #[instrument(skip(self))]
    async fn liked_video_ids(&self, user_id: Uuid) -> RepoResult<Vec<i64>> {
        let ids = sqlx::query_scalar::<_, i64>(
            r"
            SELECT video_id FROM user_video_reaction
            WHERE user_id = $1 AND reaction_type = 'like'
            ORDER BY created_at DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids)
    }
}
