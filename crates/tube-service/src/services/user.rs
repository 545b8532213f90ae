//! User profile service

use tracing::instrument;
use uuid::Uuid;

use tube_core::DomainError;

use crate::dto::{UpdateProfileRequest, UserResponse, VideoResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// User profile service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// The current user's profile
    #[instrument(skip(self))]
    pub async fn me(&self, user_id: Uuid) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        Ok(UserResponse::from(user))
    }

    /// Update the current user's display name
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        request: UpdateProfileRequest,
    ) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .update_name(user_id, request.name.trim())
            .await?;

        Ok(UserResponse::from(user))
    }

    /// Videos the current user has liked, newest like first
    #[instrument(skip(self))]
    pub async fn liked_videos(&self, user_id: Uuid) -> ServiceResult<Vec<VideoResponse>> {
        let ids = self.ctx.reaction_repo().liked_video_ids(user_id).await?;

        let mut videos = Vec::with_capacity(ids.len());
        for id in ids {
            // A liked video may have been deleted since; just skip it
            if let Some(video) = self.ctx.video_repo().find_by_id(id).await? {
                videos.push(VideoResponse::from(video));
            }
        }

        Ok(videos)
    }
}
