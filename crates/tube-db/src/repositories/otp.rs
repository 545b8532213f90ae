//! PostgreSQL implementation of OtpRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use tube_core::traits::{OtpRepository, RepoResult};
use tube_core::{OtpEntry, PhoneNumber};

use super::error::map_db_error;

/// PostgreSQL implementation of OtpRepository
#[derive(Clone)]
pub struct PgOtpRepository {
    pool: PgPool,
}

impl PgOtpRepository {
    /// Create a new PgOtpRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OtpRepository for PgOtpRepository {
    #[instrument(skip(self, entry), fields(phone = %entry.phone_number))]
    async fn replace(&self, entry: &OtpEntry) -> RepoResult<()> {
        // One active code per phone: the new row displaces whatever was there
        sqlx::query(
            r"
            INSERT INTO otp_codes (phone_number, code, expires_at, verified, created_at)
            VALUES ($1, $2, $3, FALSE, $4)
            ON CONFLICT (phone_number) DO UPDATE SET
                code = EXCLUDED.code,
                expires_at = EXCLUDED.expires_at,
                verified = FALSE,
                created_at = EXCLUDED.created_at
            ",
        )
        .bind(entry.phone_number.as_str())
        .bind(&entry.code)
        .bind(entry.expires_at)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, code))]
    async fn consume(
        &self,
        phone: &PhoneNumber,
        code: &str,
        now: DateTime<Utc>,
    ) -> RepoResult<bool> {
        // Single atomic statement; two racing verifies cannot both win
        let result = sqlx::query(
            r"
            UPDATE otp_codes
            SET verified = TRUE
            WHERE phone_number = $1
              AND code = $2
              AND verified = FALSE
              AND expires_at > $3
            ",
        )
        .bind(phone.as_str())
        .bind(code)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() == 1)
    }

    #[instrument(skip(self))]
    async fn sweep(&self, now: DateTime<Utc>) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM otp_codes
            WHERE expires_at <= $1 OR verified = TRUE
            ",
        )
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
