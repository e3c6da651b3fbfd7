//! Maintenance request API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::request::{
        CreateRequest, RequestFilter, RequestWithRelations, UpdateRequest, UpdateRequestStatus,
    },
};

use super::{ApiResponse, MessageResponse};

/// List requests, newest first
#[utoipa::path(
    get,
    path = "/requests",
    tag = "requests",
    params(
        ("status" = Option<String>, Query, description = "Filter by workflow status"),
        ("equipmentId" = Option<i32>, Query, description = "Filter by equipment"),
        ("teamId" = Option<i32>, Query, description = "Filter by maintenance team")
    ),
    responses(
        (status = 200, description = "Request list", body = Vec<RequestWithRelations>)
    )
)]
pub async fn list_requests(
    State(state): State<crate::AppState>,
    Query(filter): Query<RequestFilter>,
) -> AppResult<Json<ApiResponse<Vec<RequestWithRelations>>>> {
    let requests = state.services.requests.list(&filter).await?;
    Ok(Json(ApiResponse::new(requests)))
}

/// Get request by ID
#[utoipa::path(
    get,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request details", body = RequestWithRelations),
        (status = 404, description = "Request not found")
    )
)]
pub async fn get_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<RequestWithRelations>>> {
    let request = state.services.requests.get_by_id(id).await?;
    Ok(Json(ApiResponse::new(request)))
}

/// Create a maintenance request
#[utoipa::path(
    post,
    path = "/requests",
    tag = "requests",
    request_body = CreateRequest,
    responses(
        (status = 201, description = "Request created", body = RequestWithRelations),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Equipment not found")
    )
)]
pub async fn create_request(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<RequestWithRelations>>)> {
    let request = state.services.requests.create(&data).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::new(request))))
}

/// Update a request's mutable fields
#[utoipa::path(
    put,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    request_body = UpdateRequest,
    responses(
        (status = 200, description = "Request updated", body = RequestWithRelations),
        (status = 404, description = "Request not found")
    )
)]
pub async fn update_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateRequest>,
) -> AppResult<Json<ApiResponse<RequestWithRelations>>> {
    let request = state.services.requests.update(id, &data).await?;
    Ok(Json(ApiResponse::new(request)))
}

/// Move a request to a new workflow status
#[utoipa::path(
    patch,
    path = "/requests/{id}/status",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    request_body = UpdateRequestStatus,
    responses(
        (status = 200, description = "Status updated", body = RequestWithRelations),
        (status = 400, description = "Status is required"),
        (status = 404, description = "Request not found")
    )
)]
pub async fn update_request_status(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateRequestStatus>,
) -> AppResult<Json<ApiResponse<RequestWithRelations>>> {
    let request = state
        .services
        .requests
        .set_status(id, data.status, data.duration_hours)
        .await?;
    Ok(Json(ApiResponse::new(request)))
}

/// Delete a request
#[utoipa::path(
    delete,
    path = "/requests/{id}",
    tag = "requests",
    params(("id" = i32, Path, description = "Request ID")),
    responses(
        (status = 200, description = "Request deleted", body = MessageResponse),
        (status = 404, description = "Request not found")
    )
)]
pub async fn delete_request(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state.services.requests.delete(id).await?;
    Ok(Json(MessageResponse::new("Request deleted successfully")))
}
