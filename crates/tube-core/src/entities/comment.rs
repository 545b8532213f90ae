//! Comment entity

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Comment entity - flat, newest-first per video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: i64,
    pub video_id: i64,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Comment joined with its author's display fields for listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentWithAuthor {
    pub id: i64,
    pub video_id: i64,
    pub user_id: Uuid,
    pub body: String,
    pub author_name: Option<String>,
    pub author_phone: String,
    pub created_at: DateTime<Utc>,
}
