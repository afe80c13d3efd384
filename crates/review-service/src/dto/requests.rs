//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying user input also
//! implement `Validate`.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Team Requests
// ============================================================================

/// Member entry inside a team creation request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeamMemberRequest {
    #[validate(length(min = 1, max = 64, message = "user_id must be 1-64 characters"))]
    pub user_id: String,

    #[validate(length(min = 1, max = 64, message = "username must be 1-64 characters"))]
    pub username: String,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Create team request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 64, message = "team_name must be 1-64 characters"))]
    pub team_name: String,

    #[validate(nested)]
    #[serde(default)]
    pub members: Vec<TeamMemberRequest>,
}

// ============================================================================
// Member Requests
// ============================================================================

/// Toggle a member's activity flag
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMemberActivityRequest {
    pub is_active: bool,
}

// ============================================================================
// Pull Request Requests
// ============================================================================

/// Create pull request request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePullRequestRequest {
    #[validate(length(min = 1, max = 64, message = "pull_request_id must be 1-64 characters"))]
    pub pull_request_id: String,

    #[validate(length(min = 1, max = 256, message = "pull_request_name must be 1-256 characters"))]
    pub pull_request_name: String,

    #[validate(length(min = 1, max = 64, message = "author_id must be 1-64 characters"))]
    pub author_id: String,
}

/// Reassign reviewer request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReassignReviewerRequest {
    #[validate(length(min = 1, max = 64, message = "old_user_id must be 1-64 characters"))]
    pub old_user_id: String,
}
