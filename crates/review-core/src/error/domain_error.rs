//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// A closed enumeration: every assignment operation fails with exactly one of
/// these kinds, and call sites match on them exhaustively.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Pull request not found: {0}")]
    PullRequestNotFound(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Team already exists: {0}")]
    TeamExists(String),

    #[error("Pull request already exists: {0}")]
    PullRequestExists(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Pull request is merged: {0}")]
    PullRequestMerged(String),

    #[error("User {user_id} is not an assigned reviewer of pull request {pull_request_id}")]
    ReviewerNotAssigned {
        pull_request_id: String,
        user_id: String,
    },

    #[error("No eligible replacement candidate in team {team_name}")]
    NoCandidate { team_name: String },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::TeamNotFound(_) | Self::UserNotFound(_) | Self::PullRequestNotFound(_) => {
                "NOT_FOUND"
            }
            Self::TeamExists(_) => "TEAM_EXISTS",
            Self::PullRequestExists(_) => "PR_EXISTS",
            Self::PullRequestMerged(_) => "PR_MERGED",
            Self::ReviewerNotAssigned { .. } => "NOT_ASSIGNED",
            Self::NoCandidate { .. } => "NO_CANDIDATE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TeamNotFound(_) | Self::UserNotFound(_) | Self::PullRequestNotFound(_)
        )
    }

    /// Check if this is a conflict error (uniqueness or state violation)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::TeamExists(_)
                | Self::PullRequestExists(_)
                | Self::PullRequestMerged(_)
                | Self::ReviewerNotAssigned { .. }
                | Self::NoCandidate { .. }
        )
    }
}
