//! Team management service

use std::sync::Arc;

use review_core::entities::{Team, TeamMember};
use review_core::DomainError;
use tracing::instrument;
use validator::Validate;

use crate::dto::requests::CreateTeamRequest;
use crate::dto::responses::TeamResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Service handling team registration and lookup
#[derive(Debug, Clone)]
pub struct TeamService {
    context: Arc<ServiceContext>,
}

impl TeamService {
    pub fn new(context: Arc<ServiceContext>) -> Self {
        Self { context }
    }

    /// Register a new team together with its initial members.
    ///
    /// Fails with `TEAM_EXISTS` when a team of the same name is already
    /// registered. Members are upserted, so a user listed here may move
    /// from a previously registered team.
    #[instrument(skip(self, request), fields(team_name = %request.team_name))]
    pub async fn create_team(&self, request: CreateTeamRequest) -> ServiceResult<TeamResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let team = Team {
            name: request.team_name.clone(),
            members: request
                .members
                .into_iter()
                .map(|m| TeamMember {
                    user_id: m.user_id,
                    username: m.username,
                    is_active: m.is_active,
                })
                .collect(),
        };

        self.context.team_repo().create(&team).await?;

        // Re-read for the canonical member ordering
        let created = self
            .context
            .team_repo()
            .find_by_name(&team.name)
            .await?
            .ok_or_else(|| ServiceError::internal("team vanished after creation"))?;

        Ok(TeamResponse::from(created))
    }

    /// Fetch a team and its members by name
    #[instrument(skip(self))]
    pub async fn get_team(&self, team_name: &str) -> ServiceResult<TeamResponse> {
        let team = self
            .context
            .team_repo()
            .find_by_name(team_name)
            .await?
            .ok_or_else(|| DomainError::TeamNotFound(team_name.to_string()))?;

        Ok(TeamResponse::from(team))
    }
}
