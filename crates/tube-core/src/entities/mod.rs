//! Domain entities

mod bookmark;
mod comment;
mod otp;
mod playlist;
mod reaction;
mod user;
mod video;

pub use bookmark::{Bookmark, BookmarkedVideo};
pub use comment::{Comment, CommentWithAuthor};
pub use otp::{OtpEntry, DEFAULT_OTP_TTL_SECS};
pub use playlist::{slugify, Playlist, PlaylistHit, PlaylistPatch};
pub use reaction::{toggle_transition, Reaction, ReactionKind, ReactionTransition};
pub use user::{AppUser, Role};
pub use video::{Video, VideoPatch, VideoStats};
