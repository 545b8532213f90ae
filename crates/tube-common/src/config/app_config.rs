//! Application configuration structs
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub otp: OtpConfig,
    pub sms: SmsConfig,
    pub video_cdn: VideoCdnConfig,
    pub image_cdn: ImageCdnConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub upload: UploadConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// JWT configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_token_expiry")]
    pub token_expiry: i64,
}

/// One-time code configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OtpConfig {
    #[serde(default = "default_otp_ttl")]
    pub ttl_secs: i64,
    #[serde(default = "default_otp_sweep_interval")]
    pub sweep_interval_secs: u64,
}

/// SMS provider configuration. Without an API key delivery is skipped
/// and the code is surfaced in development responses instead.
#[derive(Debug, Clone, Deserialize)]
pub struct SmsConfig {
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Video CDN (Bunny Stream) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct VideoCdnConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub library_id: Option<String>,
    #[serde(default)]
    pub cdn_hostname: Option<String>,
}

impl VideoCdnConfig {
    /// Uploads are only possible when all three settings are present
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.library_id.is_some() && self.cdn_hostname.is_some()
    }
}

/// Image CDN (Cloudinary) configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ImageCdnConfig {
    #[serde(default)]
    pub cloud_name: Option<String>,
    #[serde(default)]
    pub upload_preset: Option<String>,
}

impl ImageCdnConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.cloud_name.is_some() && self.upload_preset.is_some()
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Upload limits
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_max_video_size")]
    pub max_video_size_mb: u32,
    #[serde(default = "default_max_image_size")]
    pub max_image_size_mb: u32,
}

impl UploadConfig {
    #[must_use]
    pub fn max_video_size_bytes(&self) -> usize {
        self.max_video_size_mb as usize * 1024 * 1024
    }

    #[must_use]
    pub fn max_image_size_bytes(&self) -> usize {
        self.max_image_size_mb as usize * 1024 * 1024
    }
}

// Default value functions
fn default_app_name() -> String {
    "tube-server".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_token_expiry() -> i64 {
    604_800 // 7 days
}

fn default_otp_ttl() -> i64 {
    300 // 5 minutes
}

fn default_otp_sweep_interval() -> u64 {
    604_800 // weekly
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

fn default_max_video_size() -> u32 {
    512
}

fn default_max_image_size() -> u32 {
    10
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("SERVER_PORT"))?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_min_connections),
            },
            jwt: JwtConfig {
                secret: env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?,
                token_expiry: env::var("JWT_TOKEN_EXPIRY")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_token_expiry),
            },
            otp: OtpConfig {
                ttl_secs: env::var("OTP_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_otp_ttl),
                sweep_interval_secs: env::var("OTP_SWEEP_INTERVAL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_otp_sweep_interval),
            },
            sms: SmsConfig {
                api_key: env::var("FAST2SMS_API_KEY").ok().filter(|s| !s.is_empty()),
            },
            video_cdn: VideoCdnConfig {
                api_key: env::var("BUNNY_API_KEY").ok().filter(|s| !s.is_empty()),
                library_id: env::var("BUNNY_LIBRARY_ID").ok().filter(|s| !s.is_empty()),
                cdn_hostname: env::var("BUNNY_CDN_HOSTNAME").ok().filter(|s| !s.is_empty()),
            },
            image_cdn: ImageCdnConfig {
                cloud_name: env::var("CLOUDINARY_CLOUD_NAME")
                    .ok()
                    .filter(|s| !s.is_empty()),
                upload_preset: env::var("CLOUDINARY_UPLOAD_PRESET")
                    .ok()
                    .filter(|s| !s.is_empty()),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: env::var("RATE_LIMIT_REQUESTS_PER_SECOND")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_requests_per_second),
                burst: env::var("RATE_LIMIT_BURST")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
            upload: UploadConfig {
                max_video_size_mb: env::var("MAX_VIDEO_SIZE_MB")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_video_size),
                max_image_size_mb: env::var("MAX_IMAGE_SIZE_MB")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_image_size),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
