//! Reaction service
//!
//! Wraps the repository's transactional toggle and shapes responses.

use tracing::{info, instrument};
use uuid::Uuid;

use tube_core::{DomainError, ReactionKind, VideoStats};

use crate::dto::{ReactionRequest, ReactionResponse, VideoStatsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the caller's reaction on a video
    #[instrument(skip(self, request))]
    pub async fn toggle(
        &self,
        user_id: Uuid,
        video_id: i64,
        request: ReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
        let desired = ReactionKind::parse(&request.reaction_type)?;

        let (stats, stored) = self
            .ctx
            .reaction_repo()
            .toggle(user_id, video_id, desired)
            .await?;

        info!(?stored, "reaction toggled");
        Ok(ReactionResponse::new(&stats, stored))
    }

    /// The caller's current reaction plus the video's counters.
    ///
    /// Works without a signed-in caller; the reaction is then `None`.
    /// This read never reports a missing video: an unknown id comes back
    /// as no reaction and zero counters.
    #[instrument(skip(self))]
    pub async fn get(
        &self,
        user_id: Option<Uuid>,
        video_id: i64,
    ) -> ServiceResult<ReactionResponse> {
        let stats = self
            .ctx
            .video_repo()
            .stats(video_id)
            .await?
            .unwrap_or(VideoStats {
                video_id,
                view_count: 0,
                like_count: 0,
                dislike_count: 0,
            });

        let reaction = match user_id {
            Some(uid) => self.ctx.reaction_repo().find(uid, video_id).await?,
            None => None,
        };

        Ok(ReactionResponse::new(&stats, reaction))
    }

    /// Engagement counters for a video
    #[instrument(skip(self))]
    pub async fn stats(&self, video_id: i64) -> ServiceResult<VideoStatsResponse> {
        let stats = self
            .ctx
            .video_repo()
            .stats(video_id)
            .await?
            .ok_or(DomainError::VideoNotFound(video_id))?;

        Ok(VideoStatsResponse::from(stats))
    }
}
