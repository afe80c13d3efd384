//! Team membership database model

use sqlx::FromRow;

/// Row shape for listing a team's members
#[derive(Debug, Clone, FromRow)]
pub struct TeamMemberModel {
    pub user_id: String,
    pub username: String,
    pub is_active: bool,
}
