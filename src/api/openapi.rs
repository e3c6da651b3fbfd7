//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{dashboard, departments, employees, equipment, health, requests, teams};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "GearGuard API",
        version = "1.0.0",
        description = "Maintenance Management System REST API"
    ),
    servers(
        (url = "/api", description = "GearGuard API")
    ),
    paths(
        // Health
        health::health_check,
        // Departments
        departments::list_departments,
        departments::get_department,
        // Employees
        employees::list_employees,
        employees::get_employee,
        // Teams
        teams::list_teams,
        teams::get_team,
        teams::create_team,
        teams::update_team,
        teams::delete_team,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        // Requests
        requests::list_requests,
        requests::get_request,
        requests::create_request,
        requests::update_request,
        requests::update_request_status,
        requests::delete_request,
        // Dashboard
        dashboard::get_dashboard_stats,
    ),
    components(
        schemas(
            // Enums
            crate::models::enums::EmployeeRole,
            crate::models::enums::EquipmentCategory,
            crate::models::enums::RequestType,
            crate::models::enums::RequestStatus,
            crate::models::enums::Priority,
            // Departments
            crate::models::department::Department,
            crate::models::department::DepartmentRef,
            // Employees
            crate::models::employee::Employee,
            crate::models::employee::EmployeeRef,
            crate::models::employee::EmployeeWithDepartment,
            // Teams
            crate::models::team::MaintenanceTeam,
            crate::models::team::TeamRef,
            crate::models::team::TeamWithMembers,
            crate::models::team::CreateTeam,
            crate::models::team::UpdateTeam,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::EquipmentRef,
            crate::models::equipment::EquipmentWithRelations,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            equipment::EquipmentListQuery,
            // Requests
            crate::models::request::MaintenanceRequest,
            crate::models::request::RequestWithRelations,
            crate::models::request::RequestFilter,
            crate::models::request::CreateRequest,
            crate::models::request::UpdateRequest,
            crate::models::request::UpdateRequestStatus,
            // Dashboard
            crate::models::dashboard::DashboardStats,
            // Health
            health::HealthResponse,
            // Envelopes
            crate::api::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "departments", description = "Department lookups"),
        (name = "employees", description = "Employee lookups"),
        (name = "teams", description = "Maintenance team management"),
        (name = "equipment", description = "Equipment management"),
        (name = "requests", description = "Maintenance request lifecycle"),
        (name = "dashboard", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
