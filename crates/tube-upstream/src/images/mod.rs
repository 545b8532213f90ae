//! Image CDN storage

mod cloudinary;

pub use cloudinary::CloudinaryClient;
