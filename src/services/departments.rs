//! Departments service

use crate::{error::AppResult, models::department::Department, repository::Repository};

#[derive(Clone)]
pub struct DepartmentsService {
    repository: Repository,
}

impl DepartmentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Department>> {
        self.repository.departments.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Department> {
        self.repository.departments.get_by_id(id).await
    }
}
