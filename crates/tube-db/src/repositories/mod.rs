//! PostgreSQL repository implementations

mod bookmark;
mod comment;
mod error;
mod otp;
mod playlist;
mod reaction;
mod user;
mod video;

pub use bookmark::PgBookmarkRepository;
pub use comment::PgCommentRepository;
pub use otp::PgOtpRepository;
pub use playlist::PgPlaylistRepository;
pub use reaction::PgReactionRepository;
pub use user::PgUserRepository;
pub use video::PgVideoRepository;
