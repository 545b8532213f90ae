//! Schema bootstrap
//!
//! The schema is created idempotently at startup rather than through
//! versioned migrations. Every statement is `IF NOT EXISTS` so repeated
//! boots against an existing database are no-ops.

use sqlx::PgPool;
use tracing::info;

const CREATE_USERS: &str = r"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    phone_number TEXT NOT NULL UNIQUE,
    name TEXT,
    role TEXT NOT NULL DEFAULT 'user' CHECK (role IN ('user', 'admin')),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
";

const CREATE_OTP_CODES: &str = r"
CREATE TABLE IF NOT EXISTS otp_codes (
    phone_number TEXT PRIMARY KEY,
    code TEXT NOT NULL,
    expires_at TIMESTAMPTZ NOT NULL,
    verified BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
";

const CREATE_PLAYLISTS: &str = r"
CREATE TABLE IF NOT EXISTS playlists (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    description TEXT,
    category TEXT,
    thumbnail_url TEXT,
    display_order INTEGER NOT NULL DEFAULT 0,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
";

const CREATE_VIDEOS: &str = r"
CREATE TABLE IF NOT EXISTS videos (
    id BIGSERIAL PRIMARY KEY,
    playlist_id BIGINT REFERENCES playlists(id) ON DELETE SET NULL,
    title TEXT NOT NULL,
    description TEXT,
    category TEXT,
    video_url TEXT NOT NULL,
    thumbnail_url TEXT,
    duration_secs INTEGER,
    sort_order INTEGER NOT NULL DEFAULT 0,
    is_active BOOLEAN NOT NULL DEFAULT TRUE,
    view_count BIGINT NOT NULL DEFAULT 0,
    like_count BIGINT NOT NULL DEFAULT 0,
    dislike_count BIGINT NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
";

const CREATE_COMMENTS: &str = r"
CREATE TABLE IF NOT EXISTS comments (
    id BIGSERIAL PRIMARY KEY,
    video_id BIGINT NOT NULL REFERENCES videos(id) ON DELETE CASCADE,
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    body TEXT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
";

const CREATE_BOOKMARKS: &str = r"
CREATE TABLE IF NOT EXISTS bookmarks (
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    video_id BIGINT NOT NULL REFERENCES videos(id) ON DELETE CASCADE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    PRIMARY KEY (user_id, video_id)
)
";

const CREATE_REACTIONS: &str = r"
CREATE TABLE IF NOT EXISTS user_video_reaction (
    user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    video_id BIGINT NOT NULL REFERENCES videos(id) ON DELETE CASCADE,
    reaction_type TEXT NOT NULL CHECK (reaction_type IN ('like', 'dislike')),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    PRIMARY KEY (user_id, video_id)
)
";

const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_videos_playlist ON videos (playlist_id, sort_order, id)",
    "CREATE INDEX IF NOT EXISTS idx_videos_active ON videos (is_active)",
    "CREATE INDEX IF NOT EXISTS idx_playlists_active ON playlists (is_active, display_order)",
    "CREATE INDEX IF NOT EXISTS idx_comments_video ON comments (video_id, created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_bookmarks_user ON bookmarks (user_id, created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_reactions_user ON user_video_reaction (user_id, created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_otp_codes_expiry ON otp_codes (expires_at)",
];

/// Create all tables and indexes if they do not exist yet.
///
/// Tables are created in dependency order so foreign keys resolve.
///
/// # Errors
/// Returns the underlying SQLx error if any statement fails.
pub async fn init_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    let tables = [
        CREATE_USERS,
        CREATE_OTP_CODES,
        CREATE_PLAYLISTS,
        CREATE_VIDEOS,
        CREATE_COMMENTS,
        CREATE_BOOKMARKS,
        CREATE_REACTIONS,
    ];

    for ddl in tables {
        sqlx::query(ddl).execute(pool).await?;
    }

    for ddl in CREATE_INDEXES {
        sqlx::query(ddl).execute(pool).await?;
    }

    info!("database schema initialized");
    Ok(())
}
