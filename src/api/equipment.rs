//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::equipment::{CreateEquipment, EquipmentWithRelations, UpdateEquipment},
};

use super::{ApiResponse, MessageResponse};

/// Query parameters for the equipment listing
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentListQuery {
    pub is_active: Option<bool>,
}

/// List equipment with relations
#[utoipa::path(
    get,
    path = "/equipment",
    tag = "equipment",
    params(
        ("isActive" = Option<bool>, Query, description = "Filter by active flag")
    ),
    responses(
        (status = 200, description = "Equipment list", body = Vec<EquipmentWithRelations>)
    )
)]
pub async fn list_equipment(
    State(state): State<crate::AppState>,
    Query(query): Query<EquipmentListQuery>,
) -> AppResult<Json<ApiResponse<Vec<EquipmentWithRelations>>>> {
    let equipment = state.services.equipment.list(query.is_active).await?;
    Ok(Json(ApiResponse::new(equipment)))
}

/// Get equipment by ID
#[utoipa::path(
    get,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment details", body = EquipmentWithRelations),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn get_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<EquipmentWithRelations>>> {
    let equipment = state.services.equipment.get_by_id(id).await?;
    Ok(Json(ApiResponse::new(equipment)))
}

/// Create equipment
#[utoipa::path(
    post,
    path = "/equipment",
    tag = "equipment",
    request_body = CreateEquipment,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentWithRelations),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Referenced team or department not found"),
        (status = 409, description = "Serial number already exists")
    )
)]
pub async fn create_equipment(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<ApiResponse<EquipmentWithRelations>>)> {
    let equipment = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(equipment))))
}

/// Update equipment
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = UpdateEquipment,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentWithRelations),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn update_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateEquipment>,
) -> AppResult<Json<ApiResponse<EquipmentWithRelations>>> {
    let equipment = state.services.equipment.update(id, &data).await?;
    Ok(Json(ApiResponse::new(equipment)))
}

/// Delete equipment and all of its maintenance requests
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "equipment",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment deleted", body = MessageResponse),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn delete_equipment(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.equipment.delete(id).await?;
    Ok(Json(MessageResponse::new("Equipment deleted successfully")))
}
