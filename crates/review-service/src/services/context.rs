//! Service context for dependency injection
//!
//! Holds the shared dependencies (database pool, repositories, reviewer
//! selector) that services need. Built once at startup and shared across
//! request handlers.

use review_core::traits::{PullRequestRepository, TeamRepository, UserRepository};
use review_core::CandidateSelector;
use sqlx::PgPool;
use std::sync::Arc;

use super::error::{ServiceError, ServiceResult};

/// Default number of reviewers assigned to a new pull request
pub const DEFAULT_INITIAL_REVIEWERS: usize = 2;

/// Shared context containing all service dependencies
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,
    team_repo: Arc<dyn TeamRepository>,
    user_repo: Arc<dyn UserRepository>,
    pull_request_repo: Arc<dyn PullRequestRepository>,
    selector: Arc<dyn CandidateSelector>,
    initial_reviewers: usize,
}

impl ServiceContext {
    /// Create a builder for constructing the context
    pub fn builder(pool: PgPool) -> ServiceContextBuilder {
        ServiceContextBuilder::new(pool)
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the team repository
    pub fn team_repo(&self) -> &Arc<dyn TeamRepository> {
        &self.team_repo
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &Arc<dyn UserRepository> {
        &self.user_repo
    }

    /// Get the pull request repository
    pub fn pull_request_repo(&self) -> &Arc<dyn PullRequestRepository> {
        &self.pull_request_repo
    }

    /// Get the reviewer selector
    pub fn selector(&self) -> &Arc<dyn CandidateSelector> {
        &self.selector
    }

    /// Number of reviewers assigned at pull request creation
    pub fn initial_reviewers(&self) -> usize {
        self.initial_reviewers
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("initial_reviewers", &self.initial_reviewers)
            .finish_non_exhaustive()
    }
}

/// Builder for `ServiceContext`
pub struct ServiceContextBuilder {
    pool: PgPool,
    team_repo: Option<Arc<dyn TeamRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    pull_request_repo: Option<Arc<dyn PullRequestRepository>>,
    selector: Option<Arc<dyn CandidateSelector>>,
    initial_reviewers: usize,
}

impl ServiceContextBuilder {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            team_repo: None,
            user_repo: None,
            pull_request_repo: None,
            selector: None,
            initial_reviewers: DEFAULT_INITIAL_REVIEWERS,
        }
    }

    pub fn team_repo(mut self, repo: Arc<dyn TeamRepository>) -> Self {
        self.team_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn pull_request_repo(mut self, repo: Arc<dyn PullRequestRepository>) -> Self {
        self.pull_request_repo = Some(repo);
        self
    }

    pub fn selector(mut self, selector: Arc<dyn CandidateSelector>) -> Self {
        self.selector = Some(selector);
        self
    }

    pub fn initial_reviewers(mut self, count: usize) -> Self {
        self.initial_reviewers = count;
        self
    }

    /// Build the context, failing if any dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext {
            pool: self.pool,
            team_repo: self
                .team_repo
                .ok_or_else(|| ServiceError::internal("team repository not configured"))?,
            user_repo: self
                .user_repo
                .ok_or_else(|| ServiceError::internal("user repository not configured"))?,
            pull_request_repo: self
                .pull_request_repo
                .ok_or_else(|| ServiceError::internal("pull request repository not configured"))?,
            selector: self
                .selector
                .ok_or_else(|| ServiceError::internal("reviewer selector not configured"))?,
            initial_reviewers: self.initial_reviewers,
        })
    }
}
