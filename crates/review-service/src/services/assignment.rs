//! Pull request assignment service
//!
//! Orchestrates pull request creation (with the initial random reviewer
//! pick) and reviewer reassignment. The reassignment transaction itself
//! lives in the storage layer; this service is the thin orchestration on
//! top of it.

use std::sync::Arc;

use review_core::entities::NewPullRequest;
use review_core::DomainError;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::requests::CreatePullRequestRequest;
use crate::dto::responses::{PullRequestResponse, ReassignmentResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Service handling pull request creation and reviewer assignment
#[derive(Debug, Clone)]
pub struct AssignmentService {
    context: Arc<ServiceContext>,
}

impl AssignmentService {
    pub fn new(context: Arc<ServiceContext>) -> Self {
        Self { context }
    }

    /// Create a pull request and assign its initial reviewers.
    ///
    /// Reviewers are drawn uniformly at random from the author's active
    /// teammates, excluding the author. The pick is best-effort: a team
    /// with fewer eligible members than the configured count yields a
    /// shorter list, down to an empty one.
    #[instrument(skip(self, request), fields(pull_request_id = %request.pull_request_id))]
    pub async fn create_pull_request(
        &self,
        request: CreatePullRequestRequest,
    ) -> ServiceResult<PullRequestResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let author = self
            .context
            .user_repo()
            .find_by_id(&request.author_id)
            .await?
            .ok_or_else(|| DomainError::UserNotFound(request.author_id.clone()))?;

        let eligible = self
            .context
            .user_repo()
            .find_eligible(&author.team_name, std::slice::from_ref(&author.user_id))
            .await?;

        let reviewers = self
            .context
            .selector()
            .pick(&eligible, self.context.initial_reviewers());

        let new_pr = NewPullRequest {
            pull_request_id: request.pull_request_id,
            pull_request_name: request.pull_request_name,
            author_id: request.author_id,
        };

        self.context
            .pull_request_repo()
            .create_with_reviewers(&new_pr, &reviewers)
            .await?;

        let created = self
            .context
            .pull_request_repo()
            .find_by_id(&new_pr.pull_request_id)
            .await?
            .ok_or_else(|| ServiceError::internal("pull request vanished after creation"))?;

        info!(
            pull_request_id = %created.pull_request_id,
            reviewer_count = created.assigned_reviewers.len(),
            "Pull request created"
        );

        Ok(PullRequestResponse::from(created))
    }

    /// Fetch a pull request with its current reviewers
    #[instrument(skip(self))]
    pub async fn get_pull_request(&self, pull_request_id: &str) -> ServiceResult<PullRequestResponse> {
        let pr = self
            .context
            .pull_request_repo()
            .find_by_id(pull_request_id)
            .await?
            .ok_or_else(|| DomainError::PullRequestNotFound(pull_request_id.to_string()))?;

        Ok(PullRequestResponse::from(pr))
    }

    /// Replace one assigned reviewer with a freshly picked teammate
    #[instrument(skip(self))]
    pub async fn reassign_reviewer(
        &self,
        pull_request_id: &str,
        old_user_id: &str,
    ) -> ServiceResult<ReassignmentResponse> {
        let (replaced_by, pull_request) = self
            .context
            .pull_request_repo()
            .reassign_reviewer(pull_request_id, old_user_id, self.context.selector().as_ref())
            .await?;

        info!(
            pull_request_id = %pull_request.pull_request_id,
            old_user_id = %old_user_id,
            new_user_id = %replaced_by,
            "Reviewer reassigned"
        );

        Ok(ReassignmentResponse {
            replaced_by,
            pull_request: PullRequestResponse::from(pull_request),
        })
    }
}
