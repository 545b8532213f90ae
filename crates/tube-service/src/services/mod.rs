//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod bookmark;
pub mod comment;
pub mod context;
pub mod error;
pub mod playlist;
pub mod reaction;
pub mod upload;
pub mod user;
pub mod video;

// Re-export all services for convenience
pub use auth::AuthService;
pub use bookmark::BookmarkService;
pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use playlist::PlaylistService;
pub use reaction::ReactionService;
pub use upload::UploadService;
pub use user::UserService;
pub use video::VideoService;
