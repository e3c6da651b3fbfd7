//! Employee API endpoints (read-only)

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::employee::EmployeeWithDepartment};

use super::ApiResponse;

/// List all employees with their department name
#[utoipa::path(
    get,
    path = "/employees",
    tag = "employees",
    responses(
        (status = 200, description = "Employee list", body = Vec<EmployeeWithDepartment>)
    )
)]
pub async fn list_employees(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<Vec<EmployeeWithDepartment>>>> {
    let employees = state.services.employees.list().await?;
    Ok(Json(ApiResponse::new(employees)))
}

/// Get employee by ID
#[utoipa::path(
    get,
    path = "/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Employee details", body = EmployeeWithDepartment),
        (status = 404, description = "Employee not found")
    )
)]
pub async fn get_employee(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<EmployeeWithDepartment>>> {
    let employee = state.services.employees.get_by_id(id).await?;
    Ok(Json(ApiResponse::new(employee)))
}
