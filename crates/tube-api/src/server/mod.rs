//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, Router};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use tube_common::{AppConfig, AppError, JwtService};
use tube_db::{
    create_pool, init_schema, PgBookmarkRepository, PgCommentRepository, PgOtpRepository,
    PgPlaylistRepository, PgReactionRepository, PgUserRepository, PgVideoRepository,
};
use tube_service::ServiceContextBuilder;
use tube_upstream::{Fast2SmsClient, MediaGateway};

use crate::jobs::spawn_otp_sweeper;
use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    // Rate limiting covers the API routes only; health probes stay open.
    let api = apply_middleware(create_router(), config);

    // Axum caps bodies at 2 MB by default, far below a video upload.
    let max_body = config.upload.max_video_size_bytes() + 1024 * 1024;

    Router::new()
        .merge(api)
        .merge(health_routes())
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body))
        .with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = tube_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Ensure the schema exists
    init_schema(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // Shared HTTP client for all upstream providers
    let http = reqwest::Client::new();

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret, config.jwt.token_expiry));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let otp_repo = Arc::new(PgOtpRepository::new(pool.clone()));
    let playlist_repo = Arc::new(PgPlaylistRepository::new(pool.clone()));
    let video_repo = Arc::new(PgVideoRepository::new(pool.clone()));
    let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
    let bookmark_repo = Arc::new(PgBookmarkRepository::new(pool.clone()));
    let reaction_repo = Arc::new(PgReactionRepository::new(pool.clone()));

    // Outbound collaborators
    let notifier = Arc::new(Fast2SmsClient::new(http.clone(), config.sms.api_key.clone()));
    let media_store = Arc::new(MediaGateway::new(
        http,
        config.video_cdn.clone(),
        config.image_cdn.clone(),
    ));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .user_repo(user_repo)
        .otp_repo(otp_repo)
        .playlist_repo(playlist_repo)
        .video_repo(video_repo)
        .comment_repo(comment_repo)
        .bookmark_repo(bookmark_repo)
        .reaction_repo(reaction_repo)
        .notifier(notifier)
        .media_store(media_store)
        .jwt_service(jwt_service)
        .otp_ttl_secs(config.otp.ttl_secs)
        .dev_mode(config.app.env.is_development())
        .max_video_size_bytes(config.upload.max_video_size_bytes())
        .max_image_size_bytes(config.upload.max_image_size_bytes())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let sweep_interval = config.otp.sweep_interval_secs;

    // Create app state
    let state = create_app_state(config).await?;

    // Periodic OTP cleanup
    let sweeper_ctx = Arc::new(state.service_context().clone());
    spawn_otp_sweeper(sweeper_ctx, sweep_interval);

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
