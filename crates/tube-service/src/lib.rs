//! # tube-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthResponse, BookmarkResponse, BookmarkedVideoResponse, CommentCountResponse, CommentResponse,
    CreateCommentRequest, CreatePlaylistRequest, CreateVideoRequest, HealthResponse, OtpResponse,
    PlaylistDetailResponse, PlaylistHitResponse, PlaylistResponse, ReactionRequest,
    ReactionResponse, ReadinessResponse, SendOtpRequest, UpdatePlaylistRequest,
    UpdateProfileRequest, UpdateVideoRequest, UploadResponse, UserResponse, VerifyOtpRequest,
    VideoResponse, VideoStatsResponse, ViewCountResponse,
};
pub use services::{
    AuthService, BookmarkService, CommentService, PlaylistService, ReactionService,
    ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UploadService,
    UserService, VideoService,
};
