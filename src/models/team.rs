//! Maintenance team model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::employee::Employee;

/// Maintenance team record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTeam {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Minimal team reference attached to aggregates
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamRef {
    pub id: i32,
    pub name: String,
}

/// Team aggregate with resolved members and derived counts
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamWithMembers {
    #[serde(flatten)]
    pub team: MaintenanceTeam,
    pub members: Vec<Employee>,
    pub member_ids: Vec<i32>,
    /// Equipment rows serviced by this team
    pub equipment_count: i64,
    /// Requests for this team with status not in {repaired, scrap}
    pub open_request_count: i64,
}

/// Validated team fields, ready for insertion
#[derive(Debug)]
pub struct NewTeam {
    pub name: String,
    pub description: Option<String>,
    pub member_ids: Vec<i32>,
}

/// Create team request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeam {
    #[validate(length(min = 1, message = "Team name cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub member_ids: Option<Vec<i32>>,
}

/// Update team request; `member_ids`, when present, replaces the whole set
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeam {
    #[validate(length(min = 1, message = "Team name cannot be empty"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub member_ids: Option<Vec<i32>>,
}
