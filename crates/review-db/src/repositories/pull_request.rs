//! PostgreSQL implementation of PullRequestRepository
//!
//! Home of the reassignment transaction. The `FOR UPDATE` lock on the pull
//! request row is the serialization point: concurrent reassignments of one
//! pull request queue behind it, while unrelated pull requests proceed
//! untouched. The transaction rolls back on drop, so every early error
//! return leaves state exactly as it was.

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, instrument};

use review_core::assignment::{ensure_assigned, ensure_open, exclusion_set};
use review_core::entities::{NewPullRequest, PullRequest, PullRequestStatus};
use review_core::error::DomainError;
use review_core::selection::CandidateSelector;
use review_core::traits::{PullRequestRepository, RepoResult};

use crate::mappers::pull_request_with_reviewers;
use crate::models::{PullRequestLockRow, PullRequestModel};

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of PullRequestRepository
#[derive(Clone)]
pub struct PgPullRequestRepository {
    pool: PgPool,
}

impl PgPullRequestRepository {
    /// Create a new PgPullRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Reviewer ids of a pull request, ascending, read inside `tx`
    async fn reviewers_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        pull_request_id: &str,
    ) -> RepoResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            r#"
            SELECT user_id FROM pr_reviewers
            WHERE pull_request_id = $1
            ORDER BY user_id
            "#,
        )
        .bind(pull_request_id)
        .fetch_all(&mut **tx)
        .await
        .map_err(map_db_error)
    }

    /// Active member ids of `team_name` outside `exclude`, ascending,
    /// read inside `tx` so the pick is based on current state under the lock
    async fn eligible_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        team_name: &str,
        exclude: &[String],
    ) -> RepoResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
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
        .fetch_all(&mut **tx)
        .await
        .map_err(map_db_error)
    }

    /// Full pull request (row plus reviewer list) read inside `tx`
    async fn fetch_in_tx(
        tx: &mut Transaction<'_, Postgres>,
        pull_request_id: &str,
    ) -> RepoResult<PullRequest> {
        let model = sqlx::query_as::<_, PullRequestModel>(
            r#"
            SELECT pull_request_id, pull_request_name, author_id, status, created_at, merged_at
            FROM pull_requests
            WHERE pull_request_id = $1
            "#,
        )
        .bind(pull_request_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| DomainError::PullRequestNotFound(pull_request_id.to_string()))?;

        let reviewers = Self::reviewers_in_tx(tx, pull_request_id).await?;
        pull_request_with_reviewers(model, reviewers)
    }
}

#[async_trait]
impl PullRequestRepository for PgPullRequestRepository {
    /// Uniqueness check, pull request insert and reviewer inserts commit
    /// together or not at all.
    #[instrument(skip(self, pull_request, reviewers), fields(pull_request_id = %pull_request.pull_request_id))]
    async fn create_with_reviewers(
        &self,
        pull_request: &NewPullRequest,
        reviewers: &[String],
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO pull_requests (pull_request_id, pull_request_name, author_id, status, created_at)
            VALUES ($1, $2, $3, $4, NOW())
            "#,
        )
        .bind(&pull_request.pull_request_id)
        .bind(&pull_request.pull_request_name)
        .bind(&pull_request.author_id)
        .bind(PullRequestStatus::Open.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            map_unique_violation(e, || {
                DomainError::PullRequestExists(pull_request.pull_request_id.clone())
            })
        })?;

        for reviewer_id in reviewers {
            sqlx::query(
                r#"
                INSERT INTO pr_reviewers (pull_request_id, user_id) VALUES ($1, $2)
                "#,
            )
            .bind(&pull_request.pull_request_id)
            .bind(reviewer_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        info!(
            pull_request_id = %pull_request.pull_request_id,
            reviewer_count = reviewers.len(),
            "Pull request created"
        );

        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, pull_request_id: &str) -> RepoResult<Option<PullRequest>> {
        let model = sqlx::query_as::<_, PullRequestModel>(
            r#"
            SELECT pull_request_id, pull_request_name, author_id, status, created_at, merged_at
            FROM pull_requests
            WHERE pull_request_id = $1
            "#,
        )
        .bind(pull_request_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        let Some(model) = model else {
            return Ok(None);
        };

        let reviewers = sqlx::query_scalar::<_, String>(
            r#"
            SELECT user_id FROM pr_reviewers
            WHERE pull_request_id = $1
            ORDER BY user_id
            "#,
        )
        .bind(pull_request_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        pull_request_with_reviewers(model, reviewers).map(Some)
    }

    #[instrument(skip(self, selector))]
    async fn reassign_reviewer(
        &self,
        pull_request_id: &str,
        old_reviewer_id: &str,
        selector: &dyn CandidateSelector,
    ) -> RepoResult<(String, PullRequest)> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Serialization point: blocks until any in-flight transaction on
        // this pull request commits or aborts.
        let locked = sqlx::query_as::<_, PullRequestLockRow>(
            r#"
            SELECT pull_request_id, author_id, status
            FROM pull_requests
            WHERE pull_request_id = $1
            FOR UPDATE
            "#,
        )
        .bind(pull_request_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| DomainError::PullRequestNotFound(pull_request_id.to_string()))?;

        let status = PullRequestStatus::parse(&locked.status).ok_or_else(|| {
            DomainError::InternalError(format!(
                "unknown pull request status '{}' for {}",
                locked.status, pull_request_id
            ))
        })?;
        ensure_open(pull_request_id, status)?;

        let reviewers = Self::reviewers_in_tx(&mut tx, pull_request_id).await?;
        ensure_assigned(pull_request_id, &reviewers, old_reviewer_id)?;

        let team_name = sqlx::query_scalar::<_, String>(
            r#"
            SELECT team_name FROM users WHERE user_id = $1
            "#,
        )
        .bind(old_reviewer_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or_else(|| DomainError::UserNotFound(old_reviewer_id.to_string()))?;

        let exclude = exclusion_set(&reviewers, &locked.author_id);
        let eligible = Self::eligible_in_tx(&mut tx, &team_name, &exclude).await?;

        let candidate = selector
            .pick_one(&eligible)
            .ok_or(DomainError::NoCandidate {
                team_name: team_name.clone(),
            })?;

        sqlx::query(
            r#"
            DELETE FROM pr_reviewers WHERE pull_request_id = $1 AND user_id = $2
            "#,
        )
        .bind(pull_request_id)
        .bind(old_reviewer_id)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(
            r#"
            INSERT INTO pr_reviewers (pull_request_id, user_id) VALUES ($1, $2)
            "#,
        )
        .bind(pull_request_id)
        .bind(&candidate)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let updated = Self::fetch_in_tx(&mut tx, pull_request_id).await?;

        tx.commit().await.map_err(map_db_error)?;

        info!(
            pull_request_id = %pull_request_id,
            old_reviewer = %old_reviewer_id,
            new_reviewer = %candidate,
            "Reviewer reassigned"
        );

        Ok((candidate, updated))
    }
}
