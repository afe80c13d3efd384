//! User model -> entity mapper

use review_core::entities::User;

use crate::models::UserModel;

/// Convert a user row to the domain entity
pub fn user_from_model(model: UserModel) -> User {
    User {
        user_id: model.user_id,
        username: model.username,
        team_name: model.team_name,
        is_active: model.is_active,
        created_at: model.created_at,
    }
}
