//! Maintenance team API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::team::{CreateTeam, TeamWithMembers, UpdateTeam},
};

use super::{ApiResponse, MessageResponse};

/// List all teams with members and counts
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses(
        (status = 200, description = "Team list", body = Vec<TeamWithMembers>)
    )
)]
pub async fn list_teams(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<TeamWithMembers>>>> {
    let teams = state.services.teams.list().await?;
    Ok(Json(ApiResponse::new(teams)))
}

/// Get team by ID
#[utoipa::path(
    get,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team details", body = TeamWithMembers),
        (status = 404, description = "Team not found")
    )
)]
pub async fn get_team(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<TeamWithMembers>>> {
    let team = state.services.teams.get_by_id(id).await?;
    Ok(Json(ApiResponse::new(team)))
}

/// Create a team
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = CreateTeam,
    responses(
        (status = 201, description = "Team created", body = TeamWithMembers),
        (status = 400, description = "Missing required fields"),
        (status = 409, description = "Team name already exists")
    )
)]
pub async fn create_team(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateTeam>,
) -> AppResult<(StatusCode, Json<ApiResponse<TeamWithMembers>>)> {
    let team = state.services.teams.create(&data).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(team))))
}

/// Update a team; a provided member set replaces the existing one
#[utoipa::path(
    put,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i32, Path, description = "Team ID")),
    request_body = UpdateTeam,
    responses(
        (status = 200, description = "Team updated", body = TeamWithMembers),
        (status = 404, description = "Team not found")
    )
)]
pub async fn update_team(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateTeam>,
) -> AppResult<Json<ApiResponse<TeamWithMembers>>> {
    let team = state.services.teams.update(id, &data).await?;
    Ok(Json(ApiResponse::new(team)))
}

/// Delete a team
#[utoipa::path(
    delete,
    path = "/teams/{id}",
    tag = "teams",
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team deleted", body = MessageResponse),
        (status = 404, description = "Team not found")
    )
)]
pub async fn delete_team(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.teams.delete(id).await?;
    Ok(Json(MessageResponse::new("Team deleted successfully")))
}
