//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post},
    Router,
};

use crate::handlers::{
    auth, bookmarks, comments, health, playlists, reactions, uploads, users, videos,
};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(playlist_routes())
        .merge(video_routes())
        .merge(comment_routes())
        .merge(upload_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/send-otp", post(auth::send_otp))
        .route("/auth/verify-otp", post(auth::verify_otp))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route("/users/@me/likes", get(users::get_liked_videos))
        .route("/users/@me/bookmarks", get(users::get_bookmarked_videos))
}

/// Playlist routes
fn playlist_routes() -> Router<AppState> {
    Router::new()
        .route("/playlists", get(playlists::list_playlists))
        .route("/playlists", post(playlists::create_playlist))
        .route("/playlists/search", get(playlists::search_playlists))
        .route("/playlists/slug/:slug", get(playlists::get_playlist_by_slug))
        .route("/playlists/:playlist_id", get(playlists::get_playlist))
        .route("/playlists/:playlist_id", patch(playlists::update_playlist))
        .route("/playlists/:playlist_id", delete(playlists::delete_playlist))
}

/// Video routes
fn video_routes() -> Router<AppState> {
    Router::new()
        // Video CRUD
        .route("/videos", get(videos::list_videos))
        .route("/videos", post(videos::create_video))
        .route("/videos/latest", get(videos::latest_videos))
        .route("/videos/search", get(videos::search_videos))
        .route("/videos/:video_id", get(videos::get_video))
        .route("/videos/:video_id", patch(videos::update_video))
        .route("/videos/:video_id", delete(videos::delete_video))
        // Engagement
        .route("/videos/:video_id/view", post(videos::record_view))
        .route("/videos/:video_id/stats", get(videos::get_video_stats))
        .route("/videos/:video_id/reaction", post(reactions::toggle_reaction))
        .route("/videos/:video_id/reaction", get(reactions::get_reaction))
        .route("/videos/:video_id/bookmark", post(bookmarks::toggle_bookmark))
        .route("/videos/:video_id/bookmark", get(bookmarks::get_bookmark))
        // Comments
        .route("/videos/:video_id/comments", get(comments::list_comments))
        .route("/videos/:video_id/comments", post(comments::create_comment))
        .route("/videos/:video_id/comments/count", get(comments::get_comment_count))
}

/// Comment routes
fn comment_routes() -> Router<AppState> {
    Router::new().route("/comments/:comment_id", delete(comments::delete_comment))
}

/// Upload routes (admin only)
fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/uploads/video", post(uploads::upload_video))
        .route("/uploads/image", post(uploads::upload_image))
}
