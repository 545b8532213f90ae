//! In-memory repository doubles
//!
//! A single `MemoryBackend` implements every repository trait over
//! mutex-guarded vectors, so service-layer tests run without Postgres.
//! Counter maintenance mirrors the SQL implementations, including the
//! clamp-at-zero rule for like and dislike counts.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tube_common::JwtService;
use tube_core::{
    toggle_transition, AppUser, Bookmark, BookmarkRepository, BookmarkedVideo, CommentRepository,
    CommentWithAuthor, DomainError, MediaFile, MediaStore, NewComment, NewPlaylist, NewVideo,
    Notifier,
    OtpEntry, OtpRepository, PhoneNumber, Playlist, PlaylistHit, PlaylistPatch,
    PlaylistRepository, Reaction, ReactionKind, ReactionRepository, RepoResult, UserRepository,
    Video, VideoPatch, VideoRepository, VideoStats,
};
use tube_service::{ServiceContext, ServiceContextBuilder};
use uuid::Uuid;

/// Shared in-memory state behind every repository trait
#[derive(Default)]
pub struct MemoryBackend {
    users: Mutex<Vec<AppUser>>,
    otps: Mutex<HashMap<String, OtpEntry>>,
    playlists: Mutex<Vec<Playlist>>,
    videos: Mutex<Vec<Video>>,
    comments: Mutex<Vec<CommentWithAuthor>>,
    bookmarks: Mutex<Vec<Bookmark>>,
    reactions: Mutex<Vec<Reaction>>,
    next_id: AtomicI64,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            ..Self::default()
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Insert a user directly, bypassing the OTP flow
    pub fn insert_user(&self, user: AppUser) {
        self.users.lock().unwrap().push(user);
    }

    /// Insert a video directly and return its ID
    pub fn insert_video(&self, title: &str, playlist_id: Option<i64>) -> i64 {
        let id = self.next_id();
        let now = Utc::now();
        self.videos.lock().unwrap().push(Video {
            id,
            playlist_id,
            title: title.to_string(),
            description: None,
            category: None,
            video_url: format!("https://cdn.test/{id}/playlist.m3u8"),
            thumbnail_url: None,
            duration_secs: Some(600),
            position: 0,
            is_active: true,
            view_count: 0,
            like_count: 0,
            dislike_count: 0,
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// Insert a playlist directly and return its ID
    pub fn insert_playlist(&self, name: &str, slug: &str) -> i64 {
        let id = self.next_id();
        let now = Utc::now();
        self.playlists.lock().unwrap().push(Playlist {
            id,
            name: name.to_string(),
            slug: slug.to_string(),
            description: None,
            category: None,
            thumbnail_url: None,
            display_order: 0,
            is_active: true,
            video_count: 0,
            created_at: now,
            updated_at: now,
        });
        id
    }

    /// The stored OTP code for a phone, if any
    pub fn stored_otp(&self, phone: &PhoneNumber) -> Option<String> {
        self.otps
            .lock()
            .unwrap()
            .get(phone.as_str())
            .map(|entry| entry.code.clone())
    }

    fn stats_of(video: &Video) -> VideoStats {
        VideoStats {
            video_id: video.id,
            view_count: video.view_count,
            like_count: video.like_count,
            dislike_count: video.dislike_count,
        }
    }

    fn count_videos(&self, playlist_id: i64) -> i64 {
        self.videos
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.playlist_id == Some(playlist_id) && v.is_active)
            .count() as i64
    }

    fn with_count(&self, playlist: Playlist) -> Playlist {
        let video_count = self.count_videos(playlist.id);
        Playlist {
            video_count,
            ..playlist
        }
    }
}

#[async_trait]
impl UserRepository for MemoryBackend {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<AppUser>> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_phone(&self, phone: &PhoneNumber) -> RepoResult<Option<AppUser>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.phone_number == *phone)
            .cloned())
    }

    async fn find_or_create(&self, phone: &PhoneNumber) -> RepoResult<AppUser> {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users.iter().find(|u| u.phone_number == *phone) {
            return Ok(user.clone());
        }
        let user = AppUser::new(phone.clone());
        users.push(user.clone());
        Ok(user)
    }

    async fn update_name(&self, id: Uuid, name: &str) -> RepoResult<AppUser> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(DomainError::UserNotFound(id))?;
        user.name = Some(name.to_string());
        user.updated_at = Utc::now();
        Ok(user.clone())
    }
}

#[async_trait]
impl OtpRepository for MemoryBackend {
    async fn replace(&self, entry: &OtpEntry) -> RepoResult<()> {
        self.otps
            .lock()
            .unwrap()
            .insert(entry.phone_number.as_str().to_string(), entry.clone());
        Ok(())
    }

    async fn consume(
        &self,
        phone: &PhoneNumber,
        code: &str,
        now: DateTime<Utc>,
    ) -> RepoResult<bool> {
        let mut otps = self.otps.lock().unwrap();
        match otps.get_mut(phone.as_str()) {
            Some(entry) if !entry.verified && entry.code == code && entry.expires_at > now => {
                entry.verified = true;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn sweep(&self, now: DateTime<Utc>) -> RepoResult<u64> {
        let mut otps = self.otps.lock().unwrap();
        let before = otps.len();
        otps.retain(|_, entry| !entry.verified && entry.expires_at > now);
        Ok((before - otps.len()) as u64)
    }
}

#[async_trait]
impl PlaylistRepository for MemoryBackend {
    async fn list(&self) -> RepoResult<Vec<Playlist>> {
        let mut playlists: Vec<Playlist> = self
            .playlists
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active)
            .cloned()
            .collect();
        playlists.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(playlists.into_iter().map(|p| self.with_count(p)).collect())
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Playlist>> {
        let found = self
            .playlists
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned();
        Ok(found.map(|p| self.with_count(p)))
    }

    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Playlist>> {
        let found = self
            .playlists
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.slug == slug && p.is_active)
            .cloned();
        Ok(found.map(|p| self.with_count(p)))
    }

    async fn search(&self, query: &str, limit: i64) -> RepoResult<Vec<PlaylistHit>> {
        let needle = query.to_lowercase();
        let mut hits: Vec<PlaylistHit> = self
            .playlists
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_active && p.name.to_lowercase().contains(&needle))
            .map(|p| PlaylistHit {
                id: p.id,
                name: p.name.clone(),
                slug: p.slug.clone(),
            })
            .collect();
        hits.sort_by(|a, b| a.name.cmp(&b.name));
        hits.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(hits)
    }

    async fn create(&self, new: &NewPlaylist) -> RepoResult<Playlist> {
        let mut playlists = self.playlists.lock().unwrap();
        if playlists.iter().any(|p| p.slug == new.slug) {
            return Err(DomainError::PlaylistExists(new.slug.clone()));
        }
        let now = Utc::now();
        let playlist = Playlist {
            id: self.next_id(),
            name: new.name.clone(),
            slug: new.slug.clone(),
            description: new.description.clone(),
            category: new.category.clone(),
            thumbnail_url: new.thumbnail_url.clone(),
            display_order: new.display_order,
            is_active: true,
            video_count: 0,
            created_at: now,
            updated_at: now,
        };
        playlists.push(playlist.clone());
        Ok(playlist)
    }

    async fn update(&self, id: i64, patch: &PlaylistPatch) -> RepoResult<Playlist> {
        let updated = {
            let mut playlists = self.playlists.lock().unwrap();
            let playlist = playlists
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(DomainError::PlaylistNotFound(id))?;
            if let Some(name) = &patch.name {
                playlist.name = name.clone();
            }
            if let Some(description) = &patch.description {
                playlist.description = Some(description.clone());
            }
            if let Some(category) = &patch.category {
                playlist.category = Some(category.clone());
            }
            if let Some(thumbnail_url) = &patch.thumbnail_url {
                playlist.thumbnail_url = Some(thumbnail_url.clone());
            }
            if let Some(display_order) = patch.display_order {
                playlist.display_order = display_order;
            }
            if let Some(is_active) = patch.is_active {
                playlist.is_active = is_active;
            }
            playlist.updated_at = Utc::now();
            playlist.clone()
        };
        Ok(self.with_count(updated))
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut playlists = self.playlists.lock().unwrap();
        let before = playlists.len();
        playlists.retain(|p| p.id != id);
        if playlists.len() == before {
            return Err(DomainError::PlaylistNotFound(id));
        }
        // Videos are detached, matching ON DELETE SET NULL
        for video in self.videos.lock().unwrap().iter_mut() {
            if video.playlist_id == Some(id) {
                video.playlist_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl VideoRepository for MemoryBackend {
    async fn list(&self, playlist_id: Option<i64>) -> RepoResult<Vec<Video>> {
        let mut videos: Vec<Video> = self
            .videos
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.is_active && (playlist_id.is_none() || v.playlist_id == playlist_id))
            .cloned()
            .collect();
        videos.sort_by(|a, b| a.position.cmp(&b.position).then(a.id.cmp(&b.id)));
        Ok(videos)
    }

    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Video>> {
        Ok(self.videos.lock().unwrap().iter().find(|v| v.id == id).cloned())
    }

    async fn latest(&self, limit: i64) -> RepoResult<Vec<Video>> {
        let mut videos: Vec<Video> = self
            .videos
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.is_active)
            .cloned()
            .collect();
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        videos.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(videos)
    }

    async fn search(&self, query: &str, limit: i64) -> RepoResult<Vec<Video>> {
        let needle = query.to_lowercase();
        let mut videos: Vec<Video> = self
            .videos
            .lock()
            .unwrap()
            .iter()
            .filter(|v| v.is_active && v.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        videos.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        videos.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(videos)
    }

    async fn create(&self, video: &NewVideo) -> RepoResult<Video> {
        let now = Utc::now();
        let created = Video {
            id: self.next_id(),
            playlist_id: video.playlist_id,
            title: video.title.clone(),
            description: video.description.clone(),
            category: video.category.clone(),
            video_url: video.video_url.clone(),
            thumbnail_url: video.thumbnail_url.clone(),
            duration_secs: video.duration_secs,
            position: video.position,
            is_active: true,
            view_count: 0,
            like_count: 0,
            dislike_count: 0,
            created_at: now,
            updated_at: now,
        };
        self.videos.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: i64, patch: &VideoPatch) -> RepoResult<Video> {
        let mut videos = self.videos.lock().unwrap();
        let video = videos
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(DomainError::VideoNotFound(id))?;
        if let Some(playlist_id) = patch.playlist_id {
            video.playlist_id = playlist_id;
        }
        if let Some(title) = &patch.title {
            video.title = title.clone();
        }
        if let Some(description) = &patch.description {
            video.description = Some(description.clone());
        }
        if let Some(category) = &patch.category {
            video.category = Some(category.clone());
        }
        if let Some(thumbnail_url) = &patch.thumbnail_url {
            video.thumbnail_url = Some(thumbnail_url.clone());
        }
        if let Some(duration_secs) = patch.duration_secs {
            video.duration_secs = Some(duration_secs);
        }
        if let Some(position) = patch.position {
            video.position = position;
        }
        if let Some(is_active) = patch.is_active {
            video.is_active = is_active;
        }
        video.updated_at = Utc::now();
        Ok(video.clone())
    }

    async fn delete(&self, id: i64) -> RepoResult<()> {
        let mut videos = self.videos.lock().unwrap();
        let before = videos.len();
        videos.retain(|v| v.id != id);
        if videos.len() == before {
            return Err(DomainError::VideoNotFound(id));
        }
        self.comments.lock().unwrap().retain(|c| c.video_id != id);
        self.bookmarks.lock().unwrap().retain(|b| b.video_id != id);
        self.reactions.lock().unwrap().retain(|r| r.video_id != id);
        Ok(())
    }

    async fn increment_views(&self, id: i64) -> RepoResult<i64> {
        let mut videos = self.videos.lock().unwrap();
        let video = videos
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or(DomainError::VideoNotFound(id))?;
        video.view_count += 1;
        Ok(video.view_count)
    }

    async fn stats(&self, id: i64) -> RepoResult<Option<VideoStats>> {
        Ok(self
            .videos
            .lock()
            .unwrap()
            .iter()
            .find(|v| v.id == id)
            .map(Self::stats_of))
    }
}

#[async_trait]
impl CommentRepository for MemoryBackend {
    async fn list_for_video(
        &self,
        video_id: i64,
        limit: i64,
    ) -> RepoResult<Vec<CommentWithAuthor>> {
        let mut comments: Vec<CommentWithAuthor> = self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.video_id == video_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(comments)
    }

    async fn count_for_video(&self, video_id: i64) -> RepoResult<i64> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.video_id == video_id)
            .count() as i64)
    }

    async fn create(&self, comment: &NewComment) -> RepoResult<CommentWithAuthor> {
        let video_exists = self
            .videos
            .lock()
            .unwrap()
            .iter()
            .any(|v| v.id == comment.video_id);
        if !video_exists {
            return Err(DomainError::VideoNotFound(comment.video_id));
        }

        let author = self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == comment.user_id)
            .cloned()
            .ok_or(DomainError::UserNotFound(comment.user_id))?;

        let created = CommentWithAuthor {
            id: self.next_id(),
            video_id: comment.video_id,
            user_id: comment.user_id,
            body: comment.body.clone(),
            author_name: author.name.clone(),
            author_phone: author.phone_number.as_str().to_string(),
            created_at: Utc::now(),
        };
        self.comments.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_own(&self, id: i64, user_id: Uuid) -> RepoResult<bool> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|c| !(c.id == id && c.user_id == user_id));
        Ok(comments.len() < before)
    }
}

#[async_trait]
impl BookmarkRepository for MemoryBackend {
    async fn toggle(&self, user_id: Uuid, video_id: i64) -> RepoResult<bool> {
        let mut bookmarks = self.bookmarks.lock().unwrap();
        let before = bookmarks.len();
        bookmarks.retain(|b| !(b.user_id == user_id && b.video_id == video_id));
        if bookmarks.len() < before {
            return Ok(false);
        }

        let video_exists = self.videos.lock().unwrap().iter().any(|v| v.id == video_id);
        if !video_exists {
            return Err(DomainError::VideoNotFound(video_id));
        }
        bookmarks.push(Bookmark {
            user_id,
            video_id,
            created_at: Utc::now(),
        });
        Ok(true)
    }

    async fn exists(&self, user_id: Uuid, video_id: i64) -> RepoResult<bool> {
        Ok(self
            .bookmarks
            .lock()
            .unwrap()
            .iter()
            .any(|b| b.user_id == user_id && b.video_id == video_id))
    }

    async fn list_for_user(&self, user_id: Uuid) -> RepoResult<Vec<BookmarkedVideo>> {
        let mut bookmarks: Vec<Bookmark> = self
            .bookmarks
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        bookmarks.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let videos = self.videos.lock().unwrap();
        let playlists = self.playlists.lock().unwrap();
        Ok(bookmarks
            .into_iter()
            .filter_map(|b| {
                videos.iter().find(|v| v.id == b.video_id).map(|v| {
                    let playlist = v
                        .playlist_id
                        .and_then(|pid| playlists.iter().find(|p| p.id == pid));
                    BookmarkedVideo {
                        video_id: v.id,
                        title: v.title.clone(),
                        thumbnail_url: v.thumbnail_url.clone(),
                        duration_secs: v.duration_secs,
                        playlist_id: v.playlist_id,
                        playlist_name: playlist.map(|p| p.name.clone()),
                        playlist_slug: playlist.map(|p| p.slug.clone()),
                        bookmarked_at: b.created_at,
                    }
                })
            })
            .collect())
    }
}

#[async_trait]
impl ReactionRepository for MemoryBackend {
    async fn toggle(
        &self,
        user_id: Uuid,
        video_id: i64,
        desired: ReactionKind,
    ) -> RepoResult<(VideoStats, Option<ReactionKind>)> {
        let mut videos = self.videos.lock().unwrap();
        let video = videos
            .iter_mut()
            .find(|v| v.id == video_id)
            .ok_or(DomainError::VideoNotFound(video_id))?;

        let mut reactions = self.reactions.lock().unwrap();
        let previous = reactions
            .iter()
            .find(|r| r.user_id == user_id && r.video_id == video_id)
            .map(|r| r.kind);

        let transition = toggle_transition(previous, desired);

        reactions.retain(|r| !(r.user_id == user_id && r.video_id == video_id));
        if let Some(kind) = transition.stored {
            reactions.push(Reaction::new(user_id, video_id, kind));
        }

        video.like_count = (video.like_count + i64::from(transition.like_delta)).max(0);
        video.dislike_count = (video.dislike_count + i64::from(transition.dislike_delta)).max(0);

        Ok((Self::stats_of(video), transition.stored))
    }

    async fn find(&self, user_id: Uuid, video_id: i64) -> RepoResult<Option<ReactionKind>> {
        Ok(self
            .reactions
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id == user_id && r.video_id == video_id)
            .map(|r| r.kind))
    }

    async fn liked_video_ids(&self, user_id: Uuid) -> RepoResult<Vec<i64>> {
        let mut liked: Vec<&Reaction> = Vec::new();
        let reactions = self.reactions.lock().unwrap();
        for reaction in reactions
            .iter()
            .filter(|r| r.user_id == user_id && r.kind == ReactionKind::Like)
        {
            liked.push(reaction);
        }
        liked.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(liked.iter().map(|r| r.video_id).collect())
    }
}

/// Notifier double that records every delivery attempt
#[derive(Default)]
pub struct StubNotifier {
    configured: bool,
    failing: bool,
    pub sent: Mutex<Vec<(String, String)>>,
}

impl StubNotifier {
    /// A notifier that reports successful delivery
    pub fn configured() -> Self {
        Self {
            configured: true,
            ..Self::default()
        }
    }

    /// A notifier with no provider, matching an unset API key
    pub fn unconfigured() -> Self {
        Self::default()
    }

    /// A notifier whose provider rejects every send
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl Notifier for StubNotifier {
    async fn send_otp(&self, phone: &PhoneNumber, code: &str) -> Result<bool, DomainError> {
        if self.failing {
            return Err(DomainError::Upstream("provider down".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((phone.as_str().to_string(), code.to_string()));
        Ok(self.configured)
    }
}

/// Media store double returning deterministic URLs
#[derive(Default)]
pub struct StubMediaStore {
    pub stored_videos: Mutex<Vec<String>>,
    pub stored_images: Mutex<Vec<String>>,
    pub deleted: Mutex<Vec<String>>,
}

#[async_trait]
impl MediaStore for StubMediaStore {
    async fn store_video(&self, title: &str, _file: &MediaFile) -> Result<String, DomainError> {
        let url = format!("https://cdn.test/{title}/playlist.m3u8");
        self.stored_videos.lock().unwrap().push(url.clone());
        Ok(url)
    }

    async fn store_image(&self, file: &MediaFile) -> Result<String, DomainError> {
        let url = format!("https://img.test/{}", file.file_name);
        self.stored_images.lock().unwrap().push(url.clone());
        Ok(url)
    }

    async fn delete_video(&self, video_url: &str) -> Result<(), DomainError> {
        self.deleted.lock().unwrap().push(video_url.to_string());
        Ok(())
    }
}

/// Everything a service-layer test needs, assembled from doubles
pub struct TestHarness {
    pub ctx: ServiceContext,
    pub backend: Arc<MemoryBackend>,
    pub notifier: Arc<StubNotifier>,
    pub media: Arc<StubMediaStore>,
}

impl TestHarness {
    /// Dev-mode harness with an unconfigured SMS provider
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(dev_mode: bool, sms_configured: bool) -> Self {
        let notifier = if sms_configured {
            StubNotifier::configured()
        } else {
            StubNotifier::unconfigured()
        };
        Self::with_notifier(dev_mode, notifier)
    }

    /// Production-mode harness whose SMS provider errors on every send
    pub fn with_failing_sms() -> Self {
        Self::with_notifier(false, StubNotifier::failing())
    }

    fn with_notifier(dev_mode: bool, notifier: StubNotifier) -> Self {
        let backend = Arc::new(MemoryBackend::new());
        let notifier = Arc::new(notifier);
        let media = Arc::new(StubMediaStore::default());
        let jwt_service = Arc::new(JwtService::new("integration-test-secret", 3600));

        let ctx = ServiceContextBuilder::new()
            .user_repo(backend.clone())
            .otp_repo(backend.clone())
            .playlist_repo(backend.clone())
            .video_repo(backend.clone())
            .comment_repo(backend.clone())
            .bookmark_repo(backend.clone())
            .reaction_repo(backend.clone())
            .notifier(notifier.clone())
            .media_store(media.clone())
            .jwt_service(jwt_service)
            .otp_ttl_secs(300)
            .dev_mode(dev_mode)
            .build()
            .expect("test context wiring");

        Self {
            ctx,
            backend,
            notifier,
            media,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
