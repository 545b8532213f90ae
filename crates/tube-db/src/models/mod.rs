//! Database models
//!
//! Row structs with SQLx `FromRow` derives. Conversions into domain
//! entities are fallible where a stored string re-enters a validated
//! domain type (phone numbers, roles, reaction kinds).

mod bookmark;
mod comment;
mod otp;
mod playlist;
mod user;
mod video;

pub use bookmark::BookmarkedVideoModel;
pub use comment::CommentWithAuthorModel;
pub use otp::OtpModel;
pub use playlist::{PlaylistHitModel, PlaylistModel};
pub use user::UserModel;
pub use video::{VideoModel, VideoStatsModel};
