//! Pull request database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for pull_requests table
#[derive(Debug, Clone, FromRow)]
pub struct PullRequestModel {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub merged_at: Option<DateTime<Utc>>,
}

/// Minimal row fetched under `FOR UPDATE` at the start of a reassignment
/// transaction
#[derive(Debug, Clone, FromRow)]
pub struct PullRequestLockRow {
    pub pull_request_id: String,
    pub author_id: String,
    pub status: String,
}
