//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use tube_core::traits::{RepoResult, UserRepository};
use tube_core::{AppUser, DomainError, PhoneNumber};

use crate::models::UserModel;

use super::error::map_db_error;

const USER_COLUMNS: &str = "id, phone_number, name, role, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<AppUser>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(AppUser::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_phone(&self, phone: &PhoneNumber) -> RepoResult<Option<AppUser>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE phone_number = $1"
        ))
        .bind(phone.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(AppUser::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_or_create(&self, phone: &PhoneNumber) -> RepoResult<AppUser> {
        // Upsert so a concurrent first-verify for the same phone cannot race
        let model = sqlx::query_as::<_, UserModel>(&format!(
            r"
            INSERT INTO users (phone_number)
            VALUES ($1)
            ON CONFLICT (phone_number) DO UPDATE SET phone_number = EXCLUDED.phone_number
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(phone.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        AppUser::try_from(model)
    }

    #[instrument(skip(self))]
    async fn update_name(&self, id: Uuid, name: &str) -> RepoResult<AppUser> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            r"
            UPDATE users
            SET name = $2, updated_at = now()
            WHERE id = $1
            RETURNING {USER_COLUMNS}
            "
        ))
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .ok_or(DomainError::UserNotFound(id))
            .and_then(AppUser::try_from)
    }
}
