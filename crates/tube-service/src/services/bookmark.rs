//! Bookmark service

use tracing::{info, instrument};
use uuid::Uuid;

use tube_core::DomainError;

use crate::dto::{BookmarkResponse, BookmarkedVideoResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Bookmark service
pub struct BookmarkService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BookmarkService<'a> {
    /// Create a new BookmarkService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle the caller's bookmark on a video
    #[instrument(skip(self))]
    pub async fn toggle(&self, user_id: Uuid, video_id: i64) -> ServiceResult<BookmarkResponse> {
        self.ctx
            .video_repo()
            .find_by_id(video_id)
            .await?
            .ok_or(DomainError::VideoNotFound(video_id))?;

        let bookmarked = self.ctx.bookmark_repo().toggle(user_id, video_id).await?;

        info!(bookmarked, "bookmark toggled");
        Ok(BookmarkResponse {
            video_id,
            bookmarked,
        })
    }

    /// Whether the caller has bookmarked a video.
    ///
    /// An anonymous caller has no bookmarks, so the answer is `false`
    /// rather than an authentication error.
    #[instrument(skip(self))]
    pub async fn check(
        &self,
        user_id: Option<Uuid>,
        video_id: i64,
    ) -> ServiceResult<BookmarkResponse> {
        let bookmarked = match user_id {
            Some(uid) => self.ctx.bookmark_repo().exists(uid, video_id).await?,
            None => false,
        };
        Ok(BookmarkResponse {
            video_id,
            bookmarked,
        })
    }

    /// The caller's bookmarked videos, newest bookmark first
    #[instrument(skip(self))]
    pub async fn list(&self, user_id: Uuid) -> ServiceResult<Vec<BookmarkedVideoResponse>> {
        let bookmarks = self.ctx.bookmark_repo().list_for_user(user_id).await?;
        Ok(bookmarks
            .into_iter()
            .map(BookmarkedVideoResponse::from)
            .collect())
    }
}
