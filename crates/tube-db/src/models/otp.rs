//! OTP database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use tube_core::{DomainError, OtpEntry, PhoneNumber};

/// Database model for the otp_codes table
#[derive(Debug, Clone, FromRow)]
pub struct OtpModel {
    pub phone_number: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<OtpModel> for OtpEntry {
    type Error = DomainError;

    fn try_from(m: OtpModel) -> Result<Self, Self::Error> {
        Ok(Self {
            phone_number: PhoneNumber::parse(&m.phone_number)?,
            code: m.code,
            expires_at: m.expires_at,
            verified: m.verified,
            created_at: m.created_at,
        })
    }
}
