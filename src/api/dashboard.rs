//! Dashboard statistics endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::dashboard::DashboardStats};

use super::ApiResponse;

/// Get the dashboard statistics snapshot
#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats)
    )
)]
pub async fn get_dashboard_stats(
    State(state): State<crate::AppState>,
) -> AppResult<Json<ApiResponse<DashboardStats>>> {
    let stats = state.services.dashboard.get_stats().await?;
    Ok(Json(ApiResponse::new(stats)))
}
