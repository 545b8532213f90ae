//! # tube-api
//!
//! REST API server built with Axum framework.

pub mod extractors;
pub mod handlers;
pub mod jobs;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::run;
