//! Domain traits (ports)

mod collaborators;
mod repositories;

pub use collaborators::{MediaFile, MediaStore, Notifier};
pub use repositories::{
    BookmarkRepository, CommentRepository, NewComment, NewPlaylist, NewVideo, OtpRepository,
    PlaylistRepository, ReactionRepository, RepoResult, UserRepository, VideoRepository,
};
