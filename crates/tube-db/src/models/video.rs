//! Video database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use tube_core::{Video, VideoStats};

/// Database model for the videos table
#[derive(Debug, Clone, FromRow)]
pub struct VideoModel {
    pub id: i64,
    pub playlist_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub sort_order: i32,
    pub is_active: bool,
    pub view_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<VideoModel> for Video {
    fn from(m: VideoModel) -> Self {
        Self {
            id: m.id,
            playlist_id: m.playlist_id,
            title: m.title,
            description: m.description,
            category: m.category,
            video_url: m.video_url,
            thumbnail_url: m.thumbnail_url,
            duration_secs: m.duration_secs,
            position: m.sort_order,
            is_active: m.is_active,
            view_count: m.view_count,
            like_count: m.like_count,
            dislike_count: m.dislike_count,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Projection of the denormalized counters on a video row
#[derive(Debug, Clone, Copy, FromRow)]
pub struct VideoStatsModel {
    pub id: i64,
    pub view_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
}

impl From<VideoStatsModel> for VideoStats {
    fn from(m: VideoStatsModel) -> Self {
        Self {
            video_id: m.id,
            view_count: m.view_count,
            like_count: m.like_count,
            dislike_count: m.dislike_count,
        }
    }
}
