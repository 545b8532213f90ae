//! Comment service

use tracing::{info, instrument};
use uuid::Uuid;

use tube_core::traits::NewComment;
use tube_core::DomainError;

use crate::dto::{CommentCountResponse, CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Comments returned per video
const COMMENT_PAGE_LIMIT: i64 = 50;

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// A video's comments, newest first
    #[instrument(skip(self))]
    pub async fn list(&self, video_id: i64) -> ServiceResult<Vec<CommentResponse>> {
        self.ctx
            .video_repo()
            .find_by_id(video_id)
            .await?
            .ok_or(DomainError::VideoNotFound(video_id))?;

        let comments = self
            .ctx
            .comment_repo()
            .list_for_video(video_id, COMMENT_PAGE_LIMIT)
            .await?;

        Ok(comments.into_iter().map(CommentResponse::from).collect())
    }

    /// How many comments a video has
    #[instrument(skip(self))]
    pub async fn count(&self, video_id: i64) -> ServiceResult<CommentCountResponse> {
        self.ctx
            .video_repo()
            .find_by_id(video_id)
            .await?
            .ok_or(DomainError::VideoNotFound(video_id))?;

        let count = self.ctx.comment_repo().count_for_video(video_id).await?;
        Ok(CommentCountResponse { video_id, count })
    }

    /// Post a comment
    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        user_id: Uuid,
        video_id: i64,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        let body = request.body.trim();
        if body.is_empty() {
            return Err(DomainError::EmptyComment.into());
        }

        let comment = self
            .ctx
            .comment_repo()
            .create(&NewComment {
                video_id,
                user_id,
                body: body.to_string(),
            })
            .await?;

        info!(comment_id = comment.id, "comment posted");
        Ok(CommentResponse::from(comment))
    }

    /// Delete the caller's own comment.
    ///
    /// Someone else's comment looks the same as a missing one.
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: Uuid, comment_id: i64) -> ServiceResult<()> {
        let deleted = self
            .ctx
            .comment_repo()
            .delete_own(comment_id, user_id)
            .await?;

        if !deleted {
            return Err(DomainError::CommentNotFound(comment_id).into());
        }

        info!(comment_id, "comment deleted");
        Ok(())
    }
}
