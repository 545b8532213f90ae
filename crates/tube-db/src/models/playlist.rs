//! Playlist database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use tube_core::{Playlist, PlaylistHit};

/// Database model for the playlists table, joined with its video count
#[derive(Debug, Clone, FromRow)]
pub struct PlaylistModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
    pub display_order: i32,
    pub is_active: bool,
    pub video_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Database model for a playlist search hit
#[derive(Debug, Clone, FromRow)]
pub struct PlaylistHitModel {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<PlaylistHitModel> for PlaylistHit {
    fn from(m: PlaylistHitModel) -> Self {
        Self {
            id: m.id,
            name: m.name,
            slug: m.slug,
        }
    }
}

impl From<PlaylistModel> for Playlist {
    fn from(m: PlaylistModel) -> Self {
        Self {
            id: m.id,
            name: m.name,
            slug: m.slug,
            description: m.description,
            category: m.category,
            thumbnail_url: m.thumbnail_url,
            display_order: m.display_order,
            is_active: m.is_active,
            video_count: m.video_count,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
