//! Business logic services

pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod equipment;
pub mod requests;
pub mod teams;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub departments: departments::DepartmentsService,
    pub employees: employees::EmployeesService,
    pub teams: teams::TeamsService,
    pub equipment: equipment::EquipmentService,
    pub requests: requests::RequestsService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            departments: departments::DepartmentsService::new(repository.clone()),
            employees: employees::EmployeesService::new(repository.clone()),
            teams: teams::TeamsService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(repository.clone()),
            requests: requests::RequestsService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository),
        }
    }
}
