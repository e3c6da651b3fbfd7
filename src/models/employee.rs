//! Employee model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::EmployeeRole;

/// Employee record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
    /// May be absent if the department was deleted
    pub department_id: Option<i32>,
    pub role: EmployeeRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employee listing row with the department name joined in
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeWithDepartment {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub employee: Employee,
    pub department_name: Option<String>,
}

/// Minimal employee reference attached to aggregates
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRef {
    pub id: i32,
    pub name: String,
}
