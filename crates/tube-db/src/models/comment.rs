//! Comment database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use tube_core::CommentWithAuthor;

/// Database model for a comment row joined with its author
#[derive(Debug, Clone, FromRow)]
pub struct CommentWithAuthorModel {
    pub id: i64,
    pub video_id: i64,
    pub user_id: Uuid,
    pub body: String,
    pub author_name: Option<String>,
    pub author_phone: String,
    pub created_at: DateTime<Utc>,
}

impl From<CommentWithAuthorModel> for CommentWithAuthor {
    fn from(m: CommentWithAuthorModel) -> Self {
        Self {
            id: m.id,
            video_id: m.video_id,
            user_id: m.user_id,
            body: m.body,
            author_name: m.author_name,
            author_phone: m.author_phone,
            created_at: m.created_at,
        }
    }
}
