//! API request handlers
//!
//! Handlers are thin: they extract, call a service, and shape the response.

pub mod auth;
pub mod bookmarks;
pub mod comments;
pub mod health;
pub mod playlists;
pub mod reactions;
pub mod uploads;
pub mod users;
pub mod videos;
