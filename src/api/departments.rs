//! Department API endpoints (read-only)

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::department::Department};

use super::ApiResponse;

/// List all departments
#[utoipa::path(
    get,
    path = "/departments",
    tag = "departments",
    responses(
        (status = 200, description = "Department list", body = Vec<Department>)
    )
)]
pub async fn list_departments(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<Department>>>> {
    let departments = state.services.departments.list().await?;
    Ok(Json(ApiResponse::new(departments)))
}

/// Get department by ID
#[utoipa::path(
    get,
    path = "/departments/{id}",
    tag = "departments",
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department details", body = Department),
        (status = 404, description = "Department not found")
    )
)]
pub async fn get_department(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Department>>> {
    let department = state.services.departments.get_by_id(id).await?;
    Ok(Json(ApiResponse::new(department)))
}
