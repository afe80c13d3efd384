//! PostgreSQL implementation of TeamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use review_core::entities::Team;
use review_core::error::DomainError;
use review_core::traits::{RepoResult, TeamRepository};

use crate::mappers::team_member_from_model;
use crate::models::TeamMemberModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of TeamRepository
#[derive(Clone)]
pub struct PgTeamRepository {
    pool: PgPool,
}

impl PgTeamRepository {
    /// Create a new PgTeamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PgTeamRepository {
    /// Create the team row and upsert its members in one transaction.
    /// Rolls back completely if the name is taken or any upsert fails.
    #[instrument(skip(self, team), fields(team_name = %team.name))]
    async fn create(&self, team: &Team) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO teams (team_name) VALUES ($1)
            "#,
        )
        .bind(&team.name)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::TeamExists(team.name.clone())))?;

        for member in &team.members {
            sqlx::query(
                r#"
                INSERT INTO users (user_id, username, team_name, is_active, created_at)
                VALUES ($1, $2, $3, $4, NOW())
                ON CONFLICT (user_id) DO UPDATE
                SET username = EXCLUDED.username,
                    team_name = EXCLUDED.team_name,
                    is_active = EXCLUDED.is_active
                "#,
            )
            .bind(&member.user_id)
            .bind(&member.username)
            .bind(&team.name)
            .bind(member.is_active)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(SELECT 1 FROM teams WHERE team_name = $1)
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        if !exists {
            return Ok(None);
        }

        let members = sqlx::query_as::<_, TeamMemberModel>(
            r#"
            SELECT user_id, username, is_active
            FROM users
            WHERE team_name = $1
            ORDER BY user_id
            "#,
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Some(Team {
            name: name.to_string(),
            members: members.into_iter().map(team_member_from_model).collect(),
        }))
    }
}
