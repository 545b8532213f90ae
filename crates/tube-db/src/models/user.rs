//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use tube_core::{AppUser, DomainError, PhoneNumber, Role};

/// Database model for the users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: Uuid,
    pub phone_number: String,
    pub name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<UserModel> for AppUser {
    type Error = DomainError;

    fn try_from(m: UserModel) -> Result<Self, Self::Error> {
        Ok(Self {
            id: m.id,
            phone_number: PhoneNumber::parse(&m.phone_number)?,
            name: m.name,
            role: Role::parse(&m.role)?,
            created_at: m.created_at,
            updated_at: m.updated_at,
        })
    }
}
