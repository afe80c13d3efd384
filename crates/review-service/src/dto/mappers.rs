//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use review_core::entities::{PullRequest, Team, TeamMember, User};

use super::responses::{
    PullRequestResponse, TeamMemberResponse, TeamResponse, UserResponse,
};

// ============================================================================
// Team Mappers
// ============================================================================

impl From<&TeamMember> for TeamMemberResponse {
    fn from(member: &TeamMember) -> Self {
        Self {
            user_id: member.user_id.clone(),
            username: member.username.clone(),
            is_active: member.is_active,
        }
    }
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            team_name: team.name.clone(),
            members: team.members.iter().map(TeamMemberResponse::from).collect(),
        }
    }
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self::from(&team)
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.clone(),
            username: user.username.clone(),
            team_name: user.team_name.clone(),
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

// ============================================================================
// Pull Request Mappers
// ============================================================================

impl From<&PullRequest> for PullRequestResponse {
    fn from(pr: &PullRequest) -> Self {
        Self {
            pull_request_id: pr.pull_request_id.clone(),
            pull_request_name: pr.pull_request_name.clone(),
            author_id: pr.author_id.clone(),
            status: pr.status.as_str().to_string(),
            assigned_reviewers: pr.assigned_reviewers.clone(),
            created_at: pr.created_at,
            merged_at: pr.merged_at,
        }
    }
}

impl From<PullRequest> for PullRequestResponse {
    fn from(pr: PullRequest) -> Self {
        Self::from(&pr)
    }
}
