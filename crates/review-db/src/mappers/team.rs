//! Team member model -> entity mapper

use review_core::entities::TeamMember;

use crate::models::TeamMemberModel;

/// Convert a team member row to the domain entity
pub fn team_member_from_model(model: TeamMemberModel) -> TeamMember {
    TeamMember {
        user_id: model.user_id,
        username: model.username,
        is_active: model.is_active,
    }
}
