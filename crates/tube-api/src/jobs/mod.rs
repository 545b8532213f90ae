//! Background jobs
//!
//! Periodic maintenance tasks spawned at server startup.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{info, warn};
use tube_service::{AuthService, ServiceContext};

/// Spawn the periodic OTP sweeper
///
/// Deletes expired and consumed OTP rows on a fixed interval so the
/// table does not grow without bound.
pub fn spawn_otp_sweeper(ctx: Arc<ServiceContext>, interval_secs: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(Duration::from_secs(interval_secs));
        // The first tick fires immediately; skip it so startup stays quiet.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let service = AuthService::new(&ctx);
            match service.sweep_expired_otps().await {
                Ok(removed) if removed > 0 => {
                    info!(removed, "swept stale OTP codes");
                }
                Ok(_) => {}
                Err(e) => {
                    warn!(error = %e, "OTP sweep failed");
                }
            }
        }
    })
}
