//! User entity and roles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::PhoneNumber;

/// Authorization role carried in the token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Stable string tag, matching the database CHECK constraint
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }

    /// Parse from the stored tag
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::Validation(format!("unknown role: {other}"))),
        }
    }

    #[inline]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::User
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity - accounts are keyed by phone number, created on first verify
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppUser {
    pub id: Uuid,
    pub phone_number: PhoneNumber,
    pub name: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AppUser {
    /// Create a new user with the default role
    pub fn new(phone_number: PhoneNumber) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            phone_number,
            name: None,
            role: Role::User,
            created_at: now,
            updated_at: now,
        }
    }
}
