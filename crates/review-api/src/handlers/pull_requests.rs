//! Pull request handlers
//!
//! Endpoints for pull request creation, lookup, and reviewer reassignment.

use axum::{
    extract::{Path, State},
    Json,
};
use review_service::{
    AssignmentService, CreatePullRequestRequest, PullRequestResponse, ReassignReviewerRequest,
    ReassignmentResponse,
};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a pull request and assign its initial reviewers
///
/// POST /pull-requests
pub async fn create_pull_request(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreatePullRequestRequest>,
) -> ApiResult<Created<Json<PullRequestResponse>>> {
    let service = AssignmentService::new(state.service_context());
    let response = service.create_pull_request(request).await?;
    Ok(Created(Json(response)))
}

/// Get a pull request with its current reviewers
///
/// GET /pull-requests/{pull_request_id}
pub async fn get_pull_request(
    State(state): State<AppState>,
    Path(pull_request_id): Path<String>,
) -> ApiResult<Json<PullRequestResponse>> {
    let service = AssignmentService::new(state.service_context());
    let response = service.get_pull_request(&pull_request_id).await?;
    Ok(Json(response))
}

/// Replace one assigned reviewer with a freshly picked teammate
///
/// POST /pull-requests/{pull_request_id}/reassign
pub async fn reassign_reviewer(
    State(state): State<AppState>,
    Path(pull_request_id): Path<String>,
    ValidatedJson(request): ValidatedJson<ReassignReviewerRequest>,
) -> ApiResult<Json<ReassignmentResponse>> {
    let service = AssignmentService::new(state.service_context());
    let response = service
        .reassign_reviewer(&pull_request_id, &request.old_user_id)
        .await?;
    Ok(Json(response))
}
