//! # tube-upstream
//!
//! HTTP clients for external providers: Fast2SMS for OTP delivery,
//! Bunny Stream for video storage, and Cloudinary for images. Each
//! client implements a collaborator trait from `tube-core` so the
//! service layer never sees provider details.

pub mod cdn;
pub mod gateway;
pub mod images;
pub mod sms;

pub use cdn::BunnyStreamClient;
pub use gateway::MediaGateway;
pub use images::CloudinaryClient;
pub use sms::Fast2SmsClient;
