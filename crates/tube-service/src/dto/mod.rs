//! Data transfer objects for API requests and responses
//!
//! Request DTOs carry validation via the `validator` derive; response DTOs
//! convert from domain entities with `From` impls.

pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateCommentRequest, CreatePlaylistRequest, CreateVideoRequest, ReactionRequest,
    SendOtpRequest, UpdatePlaylistRequest, UpdateProfileRequest, UpdateVideoRequest,
    VerifyOtpRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, AuthResponse, BookmarkResponse, BookmarkedVideoResponse, CommentCountResponse,
    CommentResponse, HealthChecks, HealthResponse, OtpResponse, PlaylistDetailResponse,
    PlaylistHitResponse, PlaylistResponse, ReactionResponse, ReadinessResponse, UploadResponse,
    UserResponse, VideoResponse, VideoStatsResponse, ViewCountResponse,
};
