//! Team handlers
//!
//! Endpoints for team registration and lookup.

use axum::{
    extract::{Path, State},
    Json,
};
use review_service::{CreateTeamRequest, TeamResponse, TeamService};

use crate::extractors::ValidatedJson;
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new team with its members
///
/// POST /teams
pub async fn create_team(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateTeamRequest>,
) -> ApiResult<Created<Json<TeamResponse>>> {
    let service = TeamService::new(state.service_context());
    let response = service.create_team(request).await?;
    Ok(Created(Json(response)))
}

/// Get a team by name
///
/// GET /teams/{team_name}
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_name): Path<String>,
) -> ApiResult<Json<TeamResponse>> {
    let service = TeamService::new(state.service_context());
    let response = service.get_team(&team_name).await?;
    Ok(Json(response))
}
