//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{
    AppUser, BookmarkedVideo, CommentWithAuthor, OtpEntry, Playlist, PlaylistHit, PlaylistPatch,
    ReactionKind, Video, VideoPatch, VideoStats,
};
use crate::error::DomainError;
use crate::value_objects::PhoneNumber;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<AppUser>>;

    /// Find user by phone number
    async fn find_by_phone(&self, phone: &PhoneNumber) -> RepoResult<Option<AppUser>>;

    /// Fetch the user for a phone number, creating one on first sight
    async fn find_or_create(&self, phone: &PhoneNumber) -> RepoResult<AppUser>;

    /// Update a user's display name
    async fn update_name(&self, id: Uuid, name: &str) -> RepoResult<AppUser>;
}

// ============================================================================
// OTP Repository
// ============================================================================

#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Replace any existing entry for the phone with a fresh one
    async fn replace(&self, entry: &OtpEntry) -> RepoResult<()>;

    /// Atomically mark the active entry verified if `code` matches.
    ///
    /// Returns `true` only when an active, matching entry was consumed.
    async fn consume(&self, phone: &PhoneNumber, code: &str, now: DateTime<Utc>)
        -> RepoResult<bool>;

    /// Delete expired or verified entries, returning how many were removed
    async fn sweep(&self, now: DateTime<Utc>) -> RepoResult<u64>;
}

// ============================================================================
// Playlist Repository
// ============================================================================

/// Fields required to create a playlist
#[derive(Debug, Clone)]
pub struct NewPlaylist {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail_url: Option<String>,
    pub display_order: i32,
}

#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    /// List active playlists in display order, with their active-video counts
    async fn list(&self) -> RepoResult<Vec<Playlist>>;

    /// Find playlist by ID, active or not; admin mutations go through here
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Playlist>>;

    /// Find an active playlist by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Playlist>>;

    /// Case-insensitive substring search on active playlist names
    async fn search(&self, query: &str, limit: i64) -> RepoResult<Vec<PlaylistHit>>;

    /// Create a new playlist; a duplicate slug is a conflict
    async fn create(&self, playlist: &NewPlaylist) -> RepoResult<Playlist>;

    /// Apply a partial update, keeping stored values for absent fields
    async fn update(&self, id: i64, patch: &PlaylistPatch) -> RepoResult<Playlist>;

    /// Delete a playlist; its videos are detached, not removed
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Video Repository
// ============================================================================

/// Fields required to create a video
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub playlist_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub position: i32,
}

#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// List active videos, optionally scoped to one playlist, by position then id
    async fn list(&self, playlist_id: Option<i64>) -> RepoResult<Vec<Video>>;

    /// Find video by ID, active or not; admin mutations go through here
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Video>>;

    /// Most recently added active videos
    async fn latest(&self, limit: i64) -> RepoResult<Vec<Video>>;

    /// Case-insensitive substring search on active video titles, newest first
    async fn search(&self, query: &str, limit: i64) -> RepoResult<Vec<Video>>;

    /// Create a new video
    async fn create(&self, video: &NewVideo) -> RepoResult<Video>;

    /// Apply a partial update, keeping stored values for absent fields
    async fn update(&self, id: i64, patch: &VideoPatch) -> RepoResult<Video>;

    /// Delete a video and its dependent rows
    async fn delete(&self, id: i64) -> RepoResult<()>;

    /// Increment the view counter, returning the new total
    async fn increment_views(&self, id: i64) -> RepoResult<i64>;

    /// Fetch the denormalized engagement counters
    async fn stats(&self, id: i64) -> RepoResult<Option<VideoStats>>;
}

// ============================================================================
// Comment Repository
// ============================================================================

/// Fields required to create a comment
#[derive(Debug, Clone)]
pub struct NewComment {
    pub video_id: i64,
    pub user_id: Uuid,
    pub body: String,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// List a video's comments with author info, newest first, capped at `limit`
    async fn list_for_video(&self, video_id: i64, limit: i64)
        -> RepoResult<Vec<CommentWithAuthor>>;

    /// How many comments a video has
    async fn count_for_video(&self, video_id: i64) -> RepoResult<i64>;

    /// Create a comment and return it joined with its author
    async fn create(&self, comment: &NewComment) -> RepoResult<CommentWithAuthor>;

    /// Delete a comment if it belongs to `user_id`; true when a row went away
    async fn delete_own(&self, id: i64, user_id: Uuid) -> RepoResult<bool>;
}

// ============================================================================
// Bookmark Repository
// ============================================================================

#[async_trait]
pub trait BookmarkRepository: Send + Sync {
    /// Toggle the bookmark for (user, video); true means it now exists
    async fn toggle(&self, user_id: Uuid, video_id: i64) -> RepoResult<bool>;

    /// Whether the user has bookmarked the video
    async fn exists(&self, user_id: Uuid, video_id: i64) -> RepoResult<bool>;

    /// List the user's bookmarked videos, newest bookmark first
    async fn list_for_user(&self, user_id: Uuid) -> RepoResult<Vec<BookmarkedVideo>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Toggle `desired` for (user, video) and adjust the video's counters
    /// in the same transaction. Returns the updated stats and the reaction
    /// left standing.
    async fn toggle(
        &self,
        user_id: Uuid,
        video_id: i64,
        desired: ReactionKind,
    ) -> RepoResult<(VideoStats, Option<ReactionKind>)>;

    /// The user's current reaction on the video, if any
    async fn find(&self, user_id: Uuid, video_id: i64) -> RepoResult<Option<ReactionKind>>;

    /// Video IDs the user has liked, newest first
    async fn liked_video_ids(&self, user_id: Uuid) -> RepoResult<Vec<i64>>;
}
