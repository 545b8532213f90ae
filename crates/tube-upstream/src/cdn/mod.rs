//! Video CDN storage

mod bunny;

pub use bunny::BunnyStreamClient;
