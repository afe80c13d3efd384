//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use review_core::entities::User;
use review_core::error::DomainError;
use review_core::traits::{RepoResult, UserRepository};

use crate::mappers::user_from_model;
use crate::models::UserModel;

use super::error::map_db_error;

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
    async fn find_by_id(&self, user_id: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            SELECT user_id, username, team_name, is_active, created_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(user_from_model))
    }

    #[instrument(skip(self))]
    async fn set_active(&self, user_id: &str, active: bool) -> RepoResult<User> {
        let result = sqlx::query_as::<_, UserModel>(
            r#"
            UPDATE users
            SET is_active = $2
            WHERE user_id = $1
            RETURNING user_id, username, team_name, is_active, created_at
            "#,
        )
        .bind(user_id)
        .bind(active)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result
            .map(user_from_model)
            .ok_or_else(|| DomainError::UserNotFound(user_id.to_string()))
    }

    #[instrument(skip(self, exclude))]
    async fn find_eligible(&self, team_name: &str, exclude: &[String]) -> RepoResult<Vec<String>> {
        let ids = sqlx::query_scalar::<_, String>(
            r#"
            SELECT user_id FROM users
            WHERE team_name = $1
              AND is_active = TRUE
              AND user_id <> ALL($2)
            ORDER BY user_id
            "#,
        )
        .bind(team_name)
        .bind(exclude)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(ids)
    }
}
