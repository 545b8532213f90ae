//! # tube-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `tube-core`. It handles:
//!
//! - Connection pool management
//! - Schema bootstrap (idempotent `CREATE TABLE IF NOT EXISTS` at startup)
//! - Database models with SQLx `FromRow` derives
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tube_db::pool::{create_pool, DatabaseConfig};
//! use tube_db::repositories::PgVideoRepository;
//! use tube_core::traits::VideoRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new("postgresql://localhost/tube");
//!     let pool = create_pool(&config).await?;
//!     tube_db::schema::init_schema(&pool).await?;
//!     let video_repo = PgVideoRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod models;
pub mod pool;
pub mod repositories;
pub mod schema;

// Re-export commonly used types
pub use pool::{create_pool, DatabaseConfig, PgPool};
pub use repositories::{
    PgBookmarkRepository, PgCommentRepository, PgOtpRepository, PgPlaylistRepository,
    PgReactionRepository, PgUserRepository, PgVideoRepository,
};
pub use schema::init_schema;
