//! User entity - a member of exactly one team

use chrono::{DateTime, Utc};

/// User entity. Identified by a globally unique id and owned by one team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
