//! OTP entry entity - one-time code lifecycle
//!
//! Lifecycle: absent -> active (unverified, unexpired) -> verified | expired.
//! At most one active entry exists per phone number; issuing a new code
//! replaces any previous entry. Terminal entries are garbage-collected by
//! a periodic sweep.

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::PhoneNumber;

/// Default validity window for a freshly issued code
pub const DEFAULT_OTP_TTL_SECS: i64 = 300;

/// OTP entry entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpEntry {
    pub phone_number: PhoneNumber,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl OtpEntry {
    /// Create a new unverified entry expiring `ttl_secs` from `now`
    pub fn new(phone_number: PhoneNumber, code: String, now: DateTime<Utc>, ttl_secs: i64) -> Self {
        Self {
            phone_number,
            code,
            expires_at: now + Duration::seconds(ttl_secs),
            verified: false,
            created_at: now,
        }
    }

    /// Check if the validity window has elapsed
    #[inline]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }

    /// Active means unverified and unexpired
    #[inline]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.verified && !self.is_expired(now)
    }

    /// Whether a verify attempt with `code` at `now` should succeed.
    ///
    /// The caller must not be able to distinguish wrong-code, expired, and
    /// already-used: all three are just `false`.
    pub fn can_verify(&self, code: &str, now: DateTime<Utc>) -> bool {
        self.is_active(now) && self.code == code
    }

    /// Terminal entries are eligible for the periodic sweep
    #[inline]
    pub fn is_sweepable(&self, now: DateTime<Utc>) -> bool {
        self.verified || self.is_expired(now)
    }
}
