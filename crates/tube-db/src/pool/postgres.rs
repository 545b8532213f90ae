//! PostgreSQL connection pool construction

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

/// How long to wait for a free connection before giving up
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Idle connections are recycled after this long
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

/// Connections are retired outright after this long
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Pool sizing for the server's PostgreSQL instance.
///
/// Timeouts are fixed; only the connection URL and pool bounds vary
/// per deployment.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    /// A pool description with default sizing
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 20,
            min_connections: 5,
        }
    }
}

/// Open a connection pool against the configured database
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect(&config.url)
        .await
}
