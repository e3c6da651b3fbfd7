//! Equipment model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    department::DepartmentRef,
    employee::EmployeeRef,
    enums::EquipmentCategory,
    team::TeamRef,
};

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub serial_number: String,
    pub category: EquipmentCategory,
    pub department_id: Option<i32>,
    /// Employee currently using the equipment
    pub assigned_employee_id: Option<i32>,
    /// Team responsible for servicing; copied onto every request at creation
    pub maintenance_team_id: Option<i32>,
    pub default_technician_id: Option<i32>,
    pub location: String,
    pub purchase_date: NaiveDate,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
    /// False once the equipment has been scrapped
    pub is_active: bool,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimal equipment reference attached to request aggregates
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentRef {
    pub id: i32,
    pub name: String,
    pub serial_number: String,
}

/// Equipment aggregate with resolved relations and derived counts
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentWithRelations {
    #[serde(flatten)]
    pub equipment: Equipment,
    pub department: Option<DepartmentRef>,
    pub assigned_employee: Option<EmployeeRef>,
    pub maintenance_team: Option<TeamRef>,
    pub default_technician: Option<EmployeeRef>,
    /// Requests against this equipment with status not in {repaired, scrap}
    pub open_request_count: i64,
}

/// Validated equipment fields, ready for insertion
#[derive(Debug)]
pub struct NewEquipment {
    pub name: String,
    pub serial_number: String,
    pub category: EquipmentCategory,
    pub department_id: i32,
    pub assigned_employee_id: Option<i32>,
    pub maintenance_team_id: i32,
    pub default_technician_id: Option<i32>,
    pub location: String,
    pub purchase_date: NaiveDate,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    #[validate(length(min = 1, message = "Equipment name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Serial number cannot be empty"))]
    pub serial_number: Option<String>,
    pub category: Option<EquipmentCategory>,
    pub department_id: Option<i32>,
    pub assigned_employee_id: Option<i32>,
    pub maintenance_team_id: Option<i32>,
    pub default_technician_id: Option<i32>,
    #[validate(length(min = 1, message = "Location cannot be empty"))]
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Update equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEquipment {
    #[validate(length(min = 1, message = "Equipment name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Serial number cannot be empty"))]
    pub serial_number: Option<String>,
    pub category: Option<EquipmentCategory>,
    pub department_id: Option<i32>,
    pub assigned_employee_id: Option<i32>,
    pub maintenance_team_id: Option<i32>,
    pub default_technician_id: Option<i32>,
    pub location: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub warranty_expiry_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
    pub image_url: Option<String>,
}
