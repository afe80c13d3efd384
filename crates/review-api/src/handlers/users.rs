//! User handlers
//!
//! Endpoints for per-member state changes.

use axum::{
    extract::{Path, State},
    Json,
};
use review_service::{MemberService, UpdateMemberActivityRequest, UserResponse};

use crate::response::ApiResult;
use crate::state::AppState;

/// Toggle a member's activity flag
///
/// PATCH /users/{user_id}
pub async fn set_member_activity(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateMemberActivityRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = MemberService::new(state.service_context());
    let response = service.set_active(&user_id, request.is_active).await?;
    Ok(Json(response))
}
