//! Member activity service

use std::sync::Arc;

use tracing::instrument;

use crate::dto::responses::UserResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Service handling per-member state changes
#[derive(Debug, Clone)]
pub struct MemberService {
    context: Arc<ServiceContext>,
}

impl MemberService {
    pub fn new(context: Arc<ServiceContext>) -> Self {
        Self { context }
    }

    /// Toggle a member's activity flag.
    ///
    /// Inactive members stop being eligible for new assignments; existing
    /// assignments are untouched.
    #[instrument(skip(self))]
    pub async fn set_active(&self, user_id: &str, is_active: bool) -> ServiceResult<UserResponse> {
        let user = self.context.user_repo().set_active(user_id, is_active).await?;
        Ok(UserResponse::from(user))
    }
}
