//! Pull request model -> entity mapper

use review_core::entities::{PullRequest, PullRequestStatus};
use review_core::error::DomainError;

use crate::models::PullRequestModel;

/// Combine a pull request row with its reviewer ids into the domain entity.
///
/// `reviewers` must already be in ascending user-id order (the repository
/// queries guarantee it).
pub fn pull_request_with_reviewers(
    model: PullRequestModel,
    reviewers: Vec<String>,
) -> Result<PullRequest, DomainError> {
    let status = PullRequestStatus::parse(&model.status).ok_or_else(|| {
        DomainError::InternalError(format!(
            "unknown pull request status '{}' for {}",
            model.status, model.pull_request_id
        ))
    })?;

    Ok(PullRequest {
        pull_request_id: model.pull_request_id,
        pull_request_name: model.pull_request_name,
        author_id: model.author_id,
        status,
        assigned_reviewers: reviewers,
        created_at: model.created_at,
        merged_at: model.merged_at,
    })
}
