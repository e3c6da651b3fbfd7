//! Employees service

use crate::{error::AppResult, models::employee::EmployeeWithDepartment, repository::Repository};

#[derive(Clone)]
pub struct EmployeesService {
    repository: Repository,
}

impl EmployeesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<EmployeeWithDepartment>> {
        self.repository.employees.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<EmployeeWithDepartment> {
        self.repository.employees.get_by_id(id).await
    }
}
