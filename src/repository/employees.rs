//! Employees repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::employee::EmployeeWithDepartment,
};

#[derive(Clone)]
pub struct EmployeesRepository {
    pool: Pool<Postgres>,
}

impl EmployeesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all employees with their department name
    pub async fn list(&self) -> AppResult<Vec<EmployeeWithDepartment>> {
        let rows = sqlx::query_as::<_, EmployeeWithDepartment>(
            r#"
            SELECT e.*, d.name AS department_name
            FROM employees e
            LEFT JOIN departments d ON e.department_id = d.id
            ORDER BY e.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get employee by ID with the department name
    pub async fn get_by_id(&self, id: i32) -> AppResult<EmployeeWithDepartment> {
        sqlx::query_as::<_, EmployeeWithDepartment>(
            r#"
            SELECT e.*, d.name AS department_name
            FROM employees e
            LEFT JOIN departments d ON e.department_id = d.id
            WHERE e.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))
    }
}
