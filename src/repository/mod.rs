//! Repository layer for database operations

pub mod departments;
pub mod employees;
pub mod equipment;
pub mod requests;
pub mod teams;

use sqlx::{Pool, Postgres};

/// Main repository struct holding the database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub departments: departments::DepartmentsRepository,
    pub employees: employees::EmployeesRepository,
    pub teams: teams::TeamsRepository,
    pub equipment: equipment::EquipmentRepository,
    pub requests: requests::RequestsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            departments: departments::DepartmentsRepository::new(pool.clone()),
            employees: employees::EmployeesRepository::new(pool.clone()),
            teams: teams::TeamsRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            requests: requests::RequestsRepository::new(pool.clone()),
            pool,
        }
    }
}
