//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`, and `Validate` where input
//! needs checking beyond shape.

use serde::{Deserialize, Deserializer};
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Request a one-time code for a phone number
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[validate(length(min = 10, max = 20, message = "Phone number must be 10-20 characters"))]
    pub phone_number: String,
}

/// Verify a one-time code
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(length(min = 10, max = 20, message = "Phone number must be 10-20 characters"))]
    pub phone_number: String,

    #[validate(length(equal = 6, message = "Code must be 6 digits"))]
    pub code: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update the current user's profile
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}

// ============================================================================
// Playlist Requests
// ============================================================================

/// Create a playlist
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlaylistRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
    pub category: Option<String>,

    pub thumbnail_url: Option<String>,
    pub display_order: Option<i32>,
}

/// Partially update a playlist; absent fields keep their stored values
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePlaylistRequest {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
    pub category: Option<String>,

    pub thumbnail_url: Option<String>,
    pub display_order: Option<i32>,

    /// `false` hides the playlist from public listings without deleting it
    pub is_active: Option<bool>,
}

// ============================================================================
// Video Requests
// ============================================================================

/// Create a video
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateVideoRequest {
    pub playlist_id: Option<i64>,

    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: String,

    pub description: Option<String>,

    #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
    pub category: Option<String>,

    #[validate(url(message = "video_url must be a valid URL"))]
    pub video_url: String,

    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub position: Option<i32>,
}

/// Partially update a video.
///
/// `playlist_id` is tri-state: absent keeps the stored value, an explicit
/// `null` detaches the video from its playlist.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateVideoRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub playlist_id: Option<Option<i64>>,

    #[validate(length(min = 1, max = 300, message = "Title must be 1-300 characters"))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
    pub category: Option<String>,

    pub thumbnail_url: Option<String>,
    pub duration_secs: Option<i32>,
    pub position: Option<i32>,

    /// `false` hides the video from public listings without deleting it
    pub is_active: Option<bool>,
}

// Distinguishes "field absent" from "field: null"
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Comment Requests
// ============================================================================

/// Create a comment on a video
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub body: String,
}

// ============================================================================
// Reaction Requests
// ============================================================================

/// Toggle a reaction on a video.
///
/// The kind check lives in `ReactionKind::parse`, but the struct still
/// derives `Validate` so it can pass through the validating extractor.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReactionRequest {
    pub reaction_type: String,
}
