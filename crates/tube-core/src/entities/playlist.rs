//! Playlist entity and slug derivation

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Playlist entity - an ordered collection of videos with a unique slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Playlist {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Manual ordering on the catalog page; lower comes first
    pub display_order: i32,
    /// Inactive playlists are hidden from public listings but kept for admins
    pub is_active: bool,
    pub video_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Slim search result row: enough to render a link, nothing more
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistHit {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// Partial update for a playlist. `None` fields keep the stored value.
#[derive(Debug, Clone, Default)]
pub struct PlaylistPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl PlaylistPatch {
    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.thumbnail_url.is_none()
            && self.display_order.is_none()
            && self.is_active.is_none()
    }
}

/// Derive a URL slug from a display name.
///
/// Lowercases, replaces runs of non-alphanumeric characters with a single
/// hyphen, and trims leading/trailing hyphens.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_hyphen = true;
        }
    }

    slug
}
