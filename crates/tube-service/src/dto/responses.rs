//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use tube_core::{
    AppUser, BookmarkedVideo, CommentWithAuthor, Playlist, PlaylistHit, ReactionKind, Video,
    VideoStats,
};

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Result of requesting a one-time code
#[derive(Debug, Serialize)]
pub struct OtpResponse {
    /// Whether the code went out via SMS
    pub sent: bool,
    /// The code itself, surfaced only in development when delivery was skipped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_otp: Option<String>,
}

/// Successful verification: a bearer token plus the signed-in user
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// User profile
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub phone_number: String,
    pub name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<AppUser> for UserResponse {
    fn from(u: AppUser) -> Self {
        Self {
            id: u.id,
            phone_number: u.phone_number.to_string(),
            name: u.name,
            role: u.role.as_str().to_string(),
            created_at: u.created_at,
        }
    }
}

// ============================================================================
// Playlist Responses
// ============================================================================

/// Playlist with its live video count
#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
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

impl From<Playlist> for PlaylistResponse {
    fn from(p: Playlist) -> Self {
        Self {
            id: p.id,
            name: p.name,
            slug: p.slug,
            description: p.description,
            category: p.category,
            thumbnail_url: p.thumbnail_url,
            display_order: p.display_order,
            is_active: p.is_active,
            video_count: p.video_count,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// A playlist with the videos it contains, for the slug detail page
#[derive(Debug, Serialize)]
pub struct PlaylistDetailResponse {
    #[serde(flatten)]
    pub playlist: PlaylistResponse,
    pub videos: Vec<VideoResponse>,
}

/// Slim search result: id, name, slug
#[derive(Debug, Serialize)]
pub struct PlaylistHitResponse {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl From<PlaylistHit> for PlaylistHitResponse {
    fn from(h: PlaylistHit) -> Self {
        Self {
            id: h.id,
            name: h.name,
            slug: h.slug,
        }
    }
}

// ============================================================================
// Video Responses
// ============================================================================

/// Video with its engagement counters
#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub id: i64,
    pub playlist_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub position: i32,
    pub is_active: bool,
    pub view_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Video> for VideoResponse {
    fn from(v: Video) -> Self {
        Self {
            id: v.id,
            playlist_id: v.playlist_id,
            title: v.title,
            description: v.description,
            category: v.category,
            video_url: v.video_url,
            thumbnail_url: v.thumbnail_url,
            duration_secs: v.duration_secs,
            position: v.position,
            is_active: v.is_active,
            view_count: v.view_count,
            like_count: v.like_count,
            dislike_count: v.dislike_count,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

/// Engagement counters only
#[derive(Debug, Serialize)]
pub struct VideoStatsResponse {
    pub video_id: i64,
    pub view_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
}

impl From<VideoStats> for VideoStatsResponse {
    fn from(s: VideoStats) -> Self {
        Self {
            video_id: s.video_id,
            view_count: s.view_count,
            like_count: s.like_count,
            dislike_count: s.dislike_count,
        }
    }
}

/// View counter after a recorded view
#[derive(Debug, Serialize)]
pub struct ViewCountResponse {
    pub video_id: i64,
    pub view_count: i64,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// State after a reaction toggle or lookup
#[derive(Debug, Serialize)]
pub struct ReactionResponse {
    pub video_id: i64,
    /// The caller's reaction left standing, if any
    pub reaction: Option<String>,
    pub like_count: i64,
    pub dislike_count: i64,
}

impl ReactionResponse {
    pub fn new(stats: &VideoStats, reaction: Option<ReactionKind>) -> Self {
        Self {
            video_id: stats.video_id,
            reaction: reaction.map(|k| k.as_str().to_string()),
            like_count: stats.like_count,
            dislike_count: stats.dislike_count,
        }
    }
}

// ============================================================================
// Comment Responses
// ============================================================================

/// Comment with author display fields
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: i64,
    pub video_id: i64,
    pub user_id: Uuid,
    pub body: String,
    pub author_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<CommentWithAuthor> for CommentResponse {
    fn from(c: CommentWithAuthor) -> Self {
        // author_phone stays server-side; fall back to a masked form
        // for users who never set a name
        let author_name = c
            .author_name
            .or_else(|| Some(mask_phone(&c.author_phone)));
        Self {
            id: c.id,
            video_id: c.video_id,
            user_id: c.user_id,
            body: c.body,
            author_name,
            created_at: c.created_at,
        }
    }
}

/// Comment total for a video
#[derive(Debug, Serialize)]
pub struct CommentCountResponse {
    pub video_id: i64,
    pub count: i64,
}

fn mask_phone(phone: &str) -> String {
    if phone.len() <= 4 {
        return "****".to_string();
    }
    format!("****{}", &phone[phone.len() - 4..])
}

// ============================================================================
// Bookmark Responses
// ============================================================================

/// State after a bookmark toggle or lookup
#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub video_id: i64,
    pub bookmarked: bool,
}

/// A bookmarked video in the user's list
#[derive(Debug, Serialize)]
pub struct BookmarkedVideoResponse {
    pub video_id: i64,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub playlist_id: Option<i64>,
    pub playlist_name: Option<String>,
    pub playlist_slug: Option<String>,
    pub bookmarked_at: DateTime<Utc>,
}

impl From<BookmarkedVideo> for BookmarkedVideoResponse {
    fn from(b: BookmarkedVideo) -> Self {
        Self {
            video_id: b.video_id,
            title: b.title,
            thumbnail_url: b.thumbnail_url,
            duration_secs: b.duration_secs,
            playlist_id: b.playlist_id,
            playlist_name: b.playlist_name,
            playlist_slug: b.playlist_slug,
            bookmarked_at: b.bookmarked_at,
        }
    }
}

// ============================================================================
// Upload Responses
// ============================================================================

/// Public URL of an uploaded file
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
