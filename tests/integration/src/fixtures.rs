//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. All ids are suffixed
//! with a process-unique counter so tests can share one database.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

// ============================================================================
// Requests
// ============================================================================

/// Team member entry for team creation
#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberFixture {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

/// Create team request
#[derive(Debug, Clone, Serialize)]
pub struct CreateTeamFixture {
    pub team_name: String,
    pub members: Vec<TeamMemberFixture>,
}

impl CreateTeamFixture {
    /// A unique team whose members are `u{suffix}_1 .. u{suffix}_n`,
    /// all active.
    pub fn unique(member_count: usize) -> Self {
        let suffix = unique_suffix();
        Self {
            team_name: format!("team{suffix}"),
            members: (1..=member_count)
                .map(|i| TeamMemberFixture {
                    user_id: format!("u{suffix}_{i}"),
                    username: format!("User {suffix}-{i}"),
                    is_active: true,
                })
                .collect(),
        }
    }

    /// Id of the i-th member (1-based)
    pub fn member_id(&self, i: usize) -> String {
        self.members[i - 1].user_id.clone()
    }
}

/// Create pull request request
#[derive(Debug, Clone, Serialize)]
pub struct CreatePullRequestFixture {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
}

impl CreatePullRequestFixture {
    pub fn unique(author_id: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            pull_request_id: format!("pr{suffix}"),
            pull_request_name: format!("Pull request {suffix}"),
            author_id: author_id.to_string(),
        }
    }
}

/// Reassign reviewer request
#[derive(Debug, Clone, Serialize)]
pub struct ReassignFixture {
    pub old_user_id: String,
}

/// Member activity toggle request
#[derive(Debug, Clone, Serialize)]
pub struct SetActivityFixture {
    pub is_active: bool,
}

// ============================================================================
// Responses
// ============================================================================

/// Team response body
#[derive(Debug, Deserialize)]
pub struct TeamBody {
    pub team_name: String,
    pub members: Vec<TeamMemberBody>,
}

/// Team member entry in a team response
#[derive(Debug, Deserialize)]
pub struct TeamMemberBody {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}

/// User response body
#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

/// Pull request response body
#[derive(Debug, Deserialize)]
pub struct PullRequestBody {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
    pub assigned_reviewers: Vec<String>,
}

/// Reassignment response body
#[derive(Debug, Deserialize)]
pub struct ReassignmentBody {
    pub replaced_by: String,
    pub pull_request: PullRequestBody,
}
