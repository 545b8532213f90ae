//! Bookmark entity

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Bookmark entity - one row per (user, video)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bookmark {
    pub user_id: Uuid,
    pub video_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Bookmark joined with the video it points at, for the user's list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkedVideo {
    pub video_id: i64,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub playlist_id: Option<i64>,
    pub playlist_name: Option<String>,
    pub playlist_slug: Option<String>,
    pub bookmarked_at: DateTime<Utc>,
}
