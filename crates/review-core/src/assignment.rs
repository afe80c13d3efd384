//! Pure assignment state-transition rules
//!
//! The reassignment transaction in the storage layer runs these checks in
//! order, each a precondition for the next. They are free of I/O so the
//! transition rules can be tested without a database.

use crate::entities::PullRequestStatus;
use crate::error::DomainError;

/// Reject any reviewer mutation on a terminal pull request
pub fn ensure_open(pull_request_id: &str, status: PullRequestStatus) -> Result<(), DomainError> {
    if status.is_terminal() {
        return Err(DomainError::PullRequestMerged(pull_request_id.to_string()));
    }
    Ok(())
}

/// Verify the outgoing reviewer is currently in the assignment relation
pub fn ensure_assigned(
    pull_request_id: &str,
    reviewers: &[String],
    old_reviewer_id: &str,
) -> Result<(), DomainError> {
    if !reviewers.iter().any(|r| r == old_reviewer_id) {
        return Err(DomainError::ReviewerNotAssigned {
            pull_request_id: pull_request_id.to_string(),
            user_id: old_reviewer_id.to_string(),
        });
    }
    Ok(())
}

/// Build the exclusion set for a replacement pick: every current reviewer
/// (including the one being replaced, which rules out immediate
/// self-reassignment) plus the author.
pub fn exclusion_set(reviewers: &[String], author_id: &str) -> Vec<String> {
    let mut exclude: Vec<String> = reviewers.to_vec();
    if !exclude.iter().any(|id| id == author_id) {
        exclude.push(author_id.to_string());
    }
    exclude
}
