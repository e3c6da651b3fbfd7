//! Maintenance teams service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::team::{CreateTeam, NewTeam, TeamWithMembers, UpdateTeam},
    repository::Repository,
};

#[derive(Clone)]
pub struct TeamsService {
    repository: Repository,
}

impl TeamsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all teams with members and derived counts
    pub async fn list(&self) -> AppResult<Vec<TeamWithMembers>> {
        self.repository.teams.list_with_members().await
    }

    /// Get a team with members and derived counts
    pub async fn get_by_id(&self, id: i32) -> AppResult<TeamWithMembers> {
        self.repository.teams.get_with_members(id).await
    }

    /// Create a team with its initial member set
    pub async fn create(&self, data: &CreateTeam) -> AppResult<TeamWithMembers> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let name = data
            .name
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                AppError::Validation("Name and memberIds array are required".to_string())
            })?;
        let member_ids = data.member_ids.clone().ok_or_else(|| {
            AppError::Validation("Name and memberIds array are required".to_string())
        })?;

        let new_team = NewTeam {
            name: name.to_string(),
            description: data.description.clone(),
            member_ids,
        };

        let team = self.repository.teams.create(&new_team).await?;
        self.repository.teams.get_with_members(team.id).await
    }

    /// Update a team; a provided member set replaces the existing one
    pub async fn update(&self, id: i32, data: &UpdateTeam) -> AppResult<TeamWithMembers> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.teams.update(id, data).await?;
        self.repository.teams.get_with_members(id).await
    }

    /// Delete a team
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.teams.delete(id).await
    }
}
