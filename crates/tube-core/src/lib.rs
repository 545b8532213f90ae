//! # tube-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AppUser, Bookmark, BookmarkedVideo, Comment, CommentWithAuthor, OtpEntry, Playlist,
    PlaylistHit, PlaylistPatch, Reaction, ReactionKind, ReactionTransition, Role, Video,
    VideoPatch, VideoStats, slugify, toggle_transition,
};
pub use error::DomainError;
pub use traits::{
    BookmarkRepository, CommentRepository, MediaFile, MediaStore, NewComment, NewPlaylist,
    NewVideo, Notifier, OtpRepository, PlaylistRepository, ReactionRepository, RepoResult,
    UserRepository, VideoRepository,
};
pub use value_objects::{generate_otp_code, PhoneNumber, OTP_CODE_LEN};
