//! Service context - dependency container for services
//!
//! Holds repository and collaborator trait objects plus a few scalar
//! settings. The container is trait-only so tests can assemble one from
//! in-memory doubles without a database.

use std::sync::Arc;

use tube_common::auth::JwtService;
use tube_core::traits::{
    BookmarkRepository, CommentRepository, MediaStore, Notifier, OtpRepository,
    PlaylistRepository, ReactionRepository, UserRepository, VideoRepository,
};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    otp_repo: Arc<dyn OtpRepository>,
    playlist_repo: Arc<dyn PlaylistRepository>,
    video_repo: Arc<dyn VideoRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    bookmark_repo: Arc<dyn BookmarkRepository>,
    reaction_repo: Arc<dyn ReactionRepository>,

    // Outbound collaborators
    notifier: Arc<dyn Notifier>,
    media_store: Arc<dyn MediaStore>,

    // Services
    jwt_service: Arc<JwtService>,

    // Settings
    otp_ttl_secs: i64,
    dev_mode: bool,
    max_video_size_bytes: usize,
    max_image_size_bytes: usize,
}

impl ServiceContext {
    /// Start building a context
    #[must_use]
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    pub fn otp_repo(&self) -> &dyn OtpRepository {
        self.otp_repo.as_ref()
    }

    pub fn playlist_repo(&self) -> &dyn PlaylistRepository {
        self.playlist_repo.as_ref()
    }

    pub fn video_repo(&self) -> &dyn VideoRepository {
        self.video_repo.as_ref()
    }

    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    pub fn bookmark_repo(&self) -> &dyn BookmarkRepository {
        self.bookmark_repo.as_ref()
    }

    pub fn reaction_repo(&self) -> &dyn ReactionRepository {
        self.reaction_repo.as_ref()
    }

    // === Collaborators ===

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub fn media_store(&self) -> &dyn MediaStore {
        self.media_store.as_ref()
    }

    /// Shared handle to the media store, for detached cleanup tasks
    pub fn media_store_arc(&self) -> Arc<dyn MediaStore> {
        Arc::clone(&self.media_store)
    }

    // === Services and settings ===

    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }

    pub fn otp_ttl_secs(&self) -> i64 {
        self.otp_ttl_secs
    }

    pub fn is_dev_mode(&self) -> bool {
        self.dev_mode
    }

    pub fn max_video_size_bytes(&self) -> usize {
        self.max_video_size_bytes
    }

    pub fn max_image_size_bytes(&self) -> usize {
        self.max_image_size_bytes
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    otp_repo: Option<Arc<dyn OtpRepository>>,
    playlist_repo: Option<Arc<dyn PlaylistRepository>>,
    video_repo: Option<Arc<dyn VideoRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    bookmark_repo: Option<Arc<dyn BookmarkRepository>>,
    reaction_repo: Option<Arc<dyn ReactionRepository>>,
    notifier: Option<Arc<dyn Notifier>>,
    media_store: Option<Arc<dyn MediaStore>>,
    jwt_service: Option<Arc<JwtService>>,
    otp_ttl_secs: i64,
    dev_mode: bool,
    max_video_size_bytes: usize,
    max_image_size_bytes: usize,
}

impl ServiceContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            user_repo: None,
            otp_repo: None,
            playlist_repo: None,
            video_repo: None,
            comment_repo: None,
            bookmark_repo: None,
            reaction_repo: None,
            notifier: None,
            media_store: None,
            jwt_service: None,
            otp_ttl_secs: 300,
            dev_mode: false,
            max_video_size_bytes: 512 * 1024 * 1024,
            max_image_size_bytes: 10 * 1024 * 1024,
        }
    }

    #[must_use]
    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn otp_repo(mut self, repo: Arc<dyn OtpRepository>) -> Self {
        self.otp_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn playlist_repo(mut self, repo: Arc<dyn PlaylistRepository>) -> Self {
        self.playlist_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn video_repo(mut self, repo: Arc<dyn VideoRepository>) -> Self {
        self.video_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn bookmark_repo(mut self, repo: Arc<dyn BookmarkRepository>) -> Self {
        self.bookmark_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn reaction_repo(mut self, repo: Arc<dyn ReactionRepository>) -> Self {
        self.reaction_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    #[must_use]
    pub fn media_store(mut self, media_store: Arc<dyn MediaStore>) -> Self {
        self.media_store = Some(media_store);
        self
    }

    #[must_use]
    pub fn jwt_service(mut self, jwt_service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(jwt_service);
        self
    }

    #[must_use]
    pub fn otp_ttl_secs(mut self, ttl: i64) -> Self {
        self.otp_ttl_secs = ttl;
        self
    }

    #[must_use]
    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    #[must_use]
    pub fn max_video_size_bytes(mut self, max: usize) -> Self {
        self.max_video_size_bytes = max;
        self
    }

    #[must_use]
    pub fn max_image_size_bytes(mut self, max: usize) -> Self {
        self.max_image_size_bytes = max;
        self
    }

    /// Finish the build, failing if any dependency was not provided
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            otp_repo: self
                .otp_repo
                .ok_or_else(|| ServiceError::validation("otp_repo is required"))?,
            playlist_repo: self
                .playlist_repo
                .ok_or_else(|| ServiceError::validation("playlist_repo is required"))?,
            video_repo: self
                .video_repo
                .ok_or_else(|| ServiceError::validation("video_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            bookmark_repo: self
                .bookmark_repo
                .ok_or_else(|| ServiceError::validation("bookmark_repo is required"))?,
            reaction_repo: self
                .reaction_repo
                .ok_or_else(|| ServiceError::validation("reaction_repo is required"))?,
            notifier: self
                .notifier
                .ok_or_else(|| ServiceError::validation("notifier is required"))?,
            media_store: self
                .media_store
                .ok_or_else(|| ServiceError::validation("media_store is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            otp_ttl_secs: self.otp_ttl_secs,
            dev_mode: self.dev_mode,
            max_video_size_bytes: self.max_video_size_bytes,
            max_image_size_bytes: self.max_image_size_bytes,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
