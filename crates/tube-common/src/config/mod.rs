//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, ImageCdnConfig,
    JwtConfig, OtpConfig, RateLimitConfig, ServerConfig, SmsConfig, UploadConfig, VideoCdnConfig,
};
