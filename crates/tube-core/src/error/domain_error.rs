//! Domain-level error taxonomy
//!
//! Every failure a repository or domain rule can produce. Upper layers map
//! these onto transport-level responses without inspecting message text.

use thiserror::Error;
use uuid::Uuid;

/// Domain errors
#[derive(Debug, Clone, Error)]
pub enum DomainError {
    // Not found
    #[error("User not found: {0}")]
    UserNotFound(Uuid),

    #[error("Playlist not found: {0}")]
    PlaylistNotFound(i64),

    #[error("Video not found: {0}")]
    VideoNotFound(i64),

    #[error("Comment not found: {0}")]
    CommentNotFound(i64),

    // Validation
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    #[error("Invalid reaction type: {0}")]
    InvalidReaction(String),

    #[error("Comment body must not be empty")]
    EmptyComment,

    // Auth
    #[error("OTP verification failed")]
    OtpRejected,

    #[error("Not allowed: {0}")]
    Forbidden(String),

    // Conflict
    #[error("Playlist already exists: {0}")]
    PlaylistExists(String),

    // Infrastructure
    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Stable machine-readable code for API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::PlaylistNotFound(_) => "PLAYLIST_NOT_FOUND",
            Self::VideoNotFound(_) => "VIDEO_NOT_FOUND",
            Self::CommentNotFound(_) => "COMMENT_NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidPhoneNumber(_) => "INVALID_PHONE_NUMBER",
            Self::InvalidReaction(_) => "INVALID_REACTION",
            Self::EmptyComment => "EMPTY_COMMENT",
            Self::OtpRejected => "OTP_REJECTED",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::PlaylistExists(_) => "PLAYLIST_EXISTS",
            Self::Upstream(_) => "UPSTREAM_ERROR",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if error is a not-found error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PlaylistNotFound(_)
                | Self::VideoNotFound(_)
                | Self::CommentNotFound(_)
        )
    }

    /// Check if error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::InvalidPhoneNumber(_)
                | Self::InvalidReaction(_)
                | Self::EmptyComment
        )
    }

    /// Check if error is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::PlaylistExists(_))
    }

    /// Check if error came from an external provider
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}
