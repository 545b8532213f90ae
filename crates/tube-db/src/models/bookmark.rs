//! Bookmark database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use tube_core::BookmarkedVideo;

/// Database model for a bookmark row joined with its video
#[derive(Debug, Clone, FromRow)]
pub struct BookmarkedVideoModel {
    pub video_id: i64,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub playlist_id: Option<i64>,
    pub playlist_name: Option<String>,
    pub playlist_slug: Option<String>,
    pub bookmarked_at: DateTime<Utc>,
}

impl From<BookmarkedVideoModel> for BookmarkedVideo {
    fn from(m: BookmarkedVideoModel) -> Self {
        Self {
            video_id: m.video_id,
            title: m.title,
            thumbnail_url: m.thumbnail_url,
            duration_secs: m.duration_secs,
            playlist_id: m.playlist_id,
            playlist_name: m.playlist_name,
            playlist_slug: m.playlist_slug,
            bookmarked_at: m.bookmarked_at,
        }
    }
}
