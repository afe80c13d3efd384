//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::collections::HashSet;

use integration_tests::{
    assert_error, assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Team Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_team() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamFixture::unique(3);

    let response = server.post("/api/v1/teams", &team).await.unwrap();
    let created: TeamBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.team_name, team.team_name);
    assert_eq!(created.members.len(), 3);

    let response = server
        .get(&format!("/api/v1/teams/{}", team.team_name))
        .await
        .unwrap();
    let fetched: TeamBody = assert_json(response, StatusCode::OK).await.unwrap();

    // Members come back in ascending user-id order
    let ids: Vec<String> = fetched.members.iter().map(|m| m.user_id.clone()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert!(fetched.members.iter().all(|m| m.is_active));
}

#[tokio::test]
async fn test_create_duplicate_team() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamFixture::unique(2);

    let response = server.post("/api/v1/teams", &team).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.post("/api/v1/teams", &team).await.unwrap();
    assert_error(response, StatusCode::CONFLICT, "TEAM_EXISTS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_unknown_team() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/teams/no-such-team").await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_team_validation() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let body = serde_json::json!({ "team_name": "", "members": [] });

    let response = server.post("/api/v1/teams", &body).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Member Activity Tests
// ============================================================================

#[tokio::test]
async fn test_set_member_activity() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamFixture::unique(2);
    server.post("/api/v1/teams", &team).await.unwrap();

    let response = server
        .patch(
            &format!("/api/v1/users/{}", team.member_id(2)),
            &SetActivityFixture { is_active: false },
        )
        .await
        .unwrap();
    let user: UserBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!user.is_active);
    assert_eq!(user.team_name, team.team_name);
}

#[tokio::test]
async fn test_set_activity_unknown_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .patch("/api/v1/users/no-such-user", &SetActivityFixture { is_active: true })
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND")
        .await
        .unwrap();
}

// ============================================================================
// Pull Request Creation Tests
// ============================================================================

#[tokio::test]
async fn test_create_pull_request_assigns_two_reviewers() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamFixture::unique(4);
    server.post("/api/v1/teams", &team).await.unwrap();

    let author = team.member_id(1);
    let pr = CreatePullRequestFixture::unique(&author);
    let response = server.post("/api/v1/pull-requests", &pr).await.unwrap();
    let created: PullRequestBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.status, "OPEN");
    assert_eq!(created.assigned_reviewers.len(), 2);
    assert!(!created.assigned_reviewers.contains(&author));
    let distinct: HashSet<&String> = created.assigned_reviewers.iter().collect();
    assert_eq!(distinct.len(), 2);
}

#[tokio::test]
async fn test_create_pull_request_with_one_eligible_member() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamFixture::unique(3);
    server.post("/api/v1/teams", &team).await.unwrap();

    // Deactivate the third member, leaving exactly one eligible teammate
    server
        .patch(
            &format!("/api/v1/users/{}", team.member_id(3)),
            &SetActivityFixture { is_active: false },
        )
        .await
        .unwrap();

    let pr = CreatePullRequestFixture::unique(&team.member_id(1));
    let response = server.post("/api/v1/pull-requests", &pr).await.unwrap();
    let created: PullRequestBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.assigned_reviewers, vec![team.member_id(2)]);
}

#[tokio::test]
async fn test_create_pull_request_without_eligible_members() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamFixture::unique(1);
    server.post("/api/v1/teams", &team).await.unwrap();

    let pr = CreatePullRequestFixture::unique(&team.member_id(1));
    let response = server.post("/api/v1/pull-requests", &pr).await.unwrap();
    let created: PullRequestBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    // A solo team yields an open pull request with no reviewers
    assert!(created.assigned_reviewers.is_empty());
}

#[tokio::test]
async fn test_create_duplicate_pull_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamFixture::unique(3);
    server.post("/api/v1/teams", &team).await.unwrap();

    let pr = CreatePullRequestFixture::unique(&team.member_id(1));
    server.post("/api/v1/pull-requests", &pr).await.unwrap();

    let response = server.post("/api/v1/pull-requests", &pr).await.unwrap();
    assert_error(response, StatusCode::CONFLICT, "PR_EXISTS")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_pull_request_unknown_author() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pr = CreatePullRequestFixture::unique("no-such-user");
    let response = server.post("/api/v1/pull-requests", &pr).await.unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND")
        .await
        .unwrap();
}

// ============================================================================
// Reassignment Tests
// ============================================================================

#[tokio::test]
async fn test_reassign_reviewer() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamFixture::unique(4);
    server.post("/api/v1/teams", &team).await.unwrap();

    let author = team.member_id(1);
    let pr = CreatePullRequestFixture::unique(&author);
    let response = server.post("/api/v1/pull-requests", &pr).await.unwrap();
    let created: PullRequestBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    let old_reviewer = created.assigned_reviewers[0].clone();
    let response = server
        .post(
            &format!("/api/v1/pull-requests/{}/reassign", pr.pull_request_id),
            &ReassignFixture {
                old_user_id: old_reviewer.clone(),
            },
        )
        .await
        .unwrap();
    let result: ReassignmentBody = assert_json(response, StatusCode::OK).await.unwrap();

    // The replacement is a teammate outside the previous assignment set
    assert_ne!(result.replaced_by, old_reviewer);
    assert_ne!(result.replaced_by, author);
    assert!(!created.assigned_reviewers.contains(&result.replaced_by));
    assert!(team
        .members
        .iter()
        .any(|m| m.user_id == result.replaced_by));

    let reviewers = &result.pull_request.assigned_reviewers;
    assert_eq!(reviewers.len(), 2);
    assert!(!reviewers.contains(&old_reviewer));
    assert!(reviewers.contains(&result.replaced_by));
}

#[tokio::test]
async fn test_reassign_without_candidate_leaves_state_untouched() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamFixture::unique(2);
    server.post("/api/v1/teams", &team).await.unwrap();

    let pr = CreatePullRequestFixture::unique(&team.member_id(1));
    let response = server.post("/api/v1/pull-requests", &pr).await.unwrap();
    let created: PullRequestBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(created.assigned_reviewers, vec![team.member_id(2)]);

    // Nobody is left to take over
    let response = server
        .post(
            &format!("/api/v1/pull-requests/{}/reassign", pr.pull_request_id),
            &ReassignFixture {
                old_user_id: team.member_id(2),
            },
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "NO_CANDIDATE")
        .await
        .unwrap();

    // The failed attempt must not have mutated the assignment
    let response = server
        .get(&format!("/api/v1/pull-requests/{}", pr.pull_request_id))
        .await
        .unwrap();
    let fetched: PullRequestBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.assigned_reviewers, vec![team.member_id(2)]);
}

#[tokio::test]
async fn test_reassign_unassigned_reviewer() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamFixture::unique(5);
    server.post("/api/v1/teams", &team).await.unwrap();

    let pr = CreatePullRequestFixture::unique(&team.member_id(1));
    let response = server.post("/api/v1/pull-requests", &pr).await.unwrap();
    let created: PullRequestBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Find a member who is neither the author nor assigned
    let outsider = team
        .members
        .iter()
        .map(|m| m.user_id.clone())
        .find(|id| id != &team.member_id(1) && !created.assigned_reviewers.contains(id))
        .expect("five members always leave an unassigned one");

    let response = server
        .post(
            &format!("/api/v1/pull-requests/{}/reassign", pr.pull_request_id),
            &ReassignFixture {
                old_user_id: outsider,
            },
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "NOT_ASSIGNED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reassign_on_merged_pull_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamFixture::unique(4);
    server.post("/api/v1/teams", &team).await.unwrap();

    let pr = CreatePullRequestFixture::unique(&team.member_id(1));
    let response = server.post("/api/v1/pull-requests", &pr).await.unwrap();
    let created: PullRequestBody = assert_json(response, StatusCode::CREATED).await.unwrap();

    server.mark_merged(&pr.pull_request_id).await.unwrap();

    let response = server
        .post(
            &format!("/api/v1/pull-requests/{}/reassign", pr.pull_request_id),
            &ReassignFixture {
                old_user_id: created.assigned_reviewers[0].clone(),
            },
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::CONFLICT, "PR_MERGED")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reassign_unknown_pull_request() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .post(
            "/api/v1/pull-requests/no-such-pr/reassign",
            &ReassignFixture {
                old_user_id: "u1".to_string(),
            },
        )
        .await
        .unwrap();
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_concurrent_reassignments_are_serialized() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let team = CreateTeamFixture::unique(6);
    server.post("/api/v1/teams", &team).await.unwrap();

    let author = team.member_id(1);
    let pr = CreatePullRequestFixture::unique(&author);
    let response = server.post("/api/v1/pull-requests", &pr).await.unwrap();
    let created: PullRequestBody = assert_json(response, StatusCode::CREATED).await.unwrap();
    let old_reviewer = created.assigned_reviewers[0].clone();

    // Two racing replacements of the same reviewer. The row lock serializes
    // them: exactly one wins, the loser observes the reviewer already gone.
    let url = format!(
        "{}/api/v1/pull-requests/{}/reassign",
        server.base_url(),
        pr.pull_request_id
    );
    let body = serde_json::json!({ "old_user_id": old_reviewer });
    let (first, second) = tokio::join!(
        server.client.post(&url).json(&body).send(),
        server.client.post(&url).json(&body).send(),
    );
    let statuses = [first.unwrap().status(), second.unwrap().status()];
    assert!(statuses.contains(&StatusCode::OK));
    assert!(statuses.contains(&StatusCode::CONFLICT));

    // Final state is one serialized order, not a blend of both
    let response = server
        .get(&format!("/api/v1/pull-requests/{}", pr.pull_request_id))
        .await
        .unwrap();
    let fetched: PullRequestBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.assigned_reviewers.len(), 2);
    assert!(!fetched.assigned_reviewers.contains(&old_reviewer));
    assert!(!fetched.assigned_reviewers.contains(&author));
    let distinct: HashSet<&String> = fetched.assigned_reviewers.iter().collect();
    assert_eq!(distinct.len(), 2);
}
