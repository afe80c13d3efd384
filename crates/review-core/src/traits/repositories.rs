//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Operations that must be atomic are single
//! trait methods; the implementation is responsible for wrapping them in
//! one transaction.

use async_trait::async_trait;

use crate::entities::{NewPullRequest, PullRequest, Team, User};
use crate::error::DomainError;
use crate::selection::CandidateSelector;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Team storage operations
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Create a team and upsert its members atomically.
    ///
    /// Fails with [`DomainError::TeamExists`] if the name is taken; no
    /// mutation occurs in that case.
    async fn create(&self, team: &Team) -> RepoResult<()>;

    /// Fetch a team with its members (ascending user-id order)
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<Team>>;
}

/// User storage operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: &str) -> RepoResult<Option<User>>;

    /// Toggle the activity flag, returning the refreshed user.
    ///
    /// Fails with [`DomainError::UserNotFound`] if the id is unknown.
    async fn set_active(&self, user_id: &str, active: bool) -> RepoResult<User>;

    /// Ids of active members of `team_name` not present in `exclude`,
    /// in ascending order. The eligibility predicate for selection.
    async fn find_eligible(&self, team_name: &str, exclude: &[String]) -> RepoResult<Vec<String>>;
}

/// Pull request storage operations, including the concurrency-controlled
/// reassignment transaction
#[async_trait]
pub trait PullRequestRepository: Send + Sync {
    /// Atomically verify id uniqueness, insert the pull request with status
    /// OPEN, and insert one reviewer assignment per entry in `reviewers`.
    ///
    /// Fails with [`DomainError::PullRequestExists`] on a duplicate id; all
    /// three effects commit or none do.
    async fn create_with_reviewers(
        &self,
        pull_request: &NewPullRequest,
        reviewers: &[String],
    ) -> RepoResult<()>;

    async fn find_by_id(&self, pull_request_id: &str) -> RepoResult<Option<PullRequest>>;

    /// Replace `old_reviewer_id` with a selector-chosen active member of the
    /// same team, in a single transaction serialized per pull request by a
    /// row-level exclusive lock.
    ///
    /// Returns the chosen id and the refreshed pull request. Fails with
    /// `PullRequestNotFound`, `PullRequestMerged`, `ReviewerNotAssigned`,
    /// `UserNotFound` or `NoCandidate`; any failure leaves state untouched.
    async fn reassign_reviewer(
        &self,
        pull_request_id: &str,
        old_reviewer_id: &str,
        selector: &dyn CandidateSelector,
    ) -> RepoResult<(String, PullRequest)>;
}
