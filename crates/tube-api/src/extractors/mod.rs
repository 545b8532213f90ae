//! Request extractors
//!
//! Custom Axum extractors for authentication and request validation.

pub mod auth;
pub mod validated;

pub use auth::{AdminUser, AuthUser, OptionalAuthUser};
pub use validated::ValidatedJson;
