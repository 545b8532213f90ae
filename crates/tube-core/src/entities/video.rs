//! Video entity, partial updates, and engagement stats

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Video entity - belongs to at most one playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Video {
    pub id: i64,
    pub playlist_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub position: i32,
    /// Inactive videos are hidden from public listings but kept for admins
    pub is_active: bool,
    pub view_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update for a video. `None` fields keep the stored value.
#[derive(Debug, Clone, Default)]
pub struct VideoPatch {
    pub playlist_id: Option<Option<i64>>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub position: Option<i32>,
    pub is_active: Option<bool>,
}

impl VideoPatch {
    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.playlist_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.thumbnail_url.is_none()
            && self.duration_secs.is_none()
            && self.position.is_none()
            && self.is_active.is_none()
    }
}

/// Denormalized engagement counters for a single video
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoStats {
    pub video_id: i64,
    pub view_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
}
