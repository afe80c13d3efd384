//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{health, pull_requests, teams, users};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (mounted outside /api/v1)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(team_routes())
        .merge(user_routes())
        .merge(pull_request_routes())
}

/// Team routes
fn team_routes() -> Router<AppState> {
    Router::new()
        .route("/teams", post(teams::create_team))
        .route("/teams/:team_name", get(teams::get_team))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users/:user_id", patch(users::set_member_activity))
}

/// Pull request routes
fn pull_request_routes() -> Router<AppState> {
    Router::new()
        .route("/pull-requests", post(pull_requests::create_pull_request))
        .route(
            "/pull-requests/:pull_request_id",
            get(pull_requests::get_pull_request),
        )
        .route(
            "/pull-requests/:pull_request_id/reassign",
            post(pull_requests::reassign_reviewer),
        )
}
