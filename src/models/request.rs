//! Maintenance request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{
    employee::EmployeeRef,
    enums::{Priority, RequestStatus, RequestType},
    equipment::EquipmentRef,
    team::TeamRef,
};

/// Maintenance request record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: i32,
    pub subject: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub equipment_id: i32,
    /// Copied from the equipment at creation; not editable afterwards
    pub maintenance_team_id: Option<i32>,
    pub assigned_technician_id: Option<i32>,
    pub requested_by_id: Option<i32>,
    pub scheduled_date: Option<DateTime<Utc>>,
    /// Stamped when the request enters `repaired`
    pub completed_date: Option<DateTime<Utc>>,
    pub duration_hours: Option<f64>,
    pub priority: Priority,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl MaintenanceRequest {
    /// A request is overdue when it is still open and its scheduled date
    /// has passed. Requests without a scheduled date are never overdue.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        if !self.status.is_open() {
            return false;
        }
        match self.scheduled_date {
            Some(scheduled) => scheduled < now,
            None => false,
        }
    }
}

/// Request aggregate with resolved relations and the overdue flag
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestWithRelations {
    #[serde(flatten)]
    pub request: MaintenanceRequest,
    pub equipment: Option<EquipmentRef>,
    pub maintenance_team: Option<TeamRef>,
    pub assigned_technician: Option<EmployeeRef>,
    pub requested_by: Option<EmployeeRef>,
    pub is_overdue: bool,
}

/// Validated request fields, ready for insertion. The team id is the one
/// inherited from the equipment, not caller input.
#[derive(Debug)]
pub struct NewRequest {
    pub subject: String,
    pub description: Option<String>,
    pub request_type: RequestType,
    pub equipment_id: i32,
    pub maintenance_team_id: Option<i32>,
    pub requested_by_id: i32,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub notes: Option<String>,
}

/// Query filters for request listings
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequestFilter {
    pub status: Option<RequestStatus>,
    pub equipment_id: Option<i32>,
    pub team_id: Option<i32>,
}

/// Create request payload. The maintenance team is never accepted here;
/// it is inherited from the referenced equipment.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRequest {
    #[validate(length(min = 1, message = "Subject cannot be empty"))]
    pub subject: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub request_type: Option<RequestType>,
    pub equipment_id: Option<i32>,
    pub requested_by_id: Option<i32>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub priority: Option<Priority>,
    pub notes: Option<String>,
}

/// Update request payload; only this safelist of fields is mutable.
/// `equipment_id` and `maintenance_team_id` are immutable post-creation.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    #[validate(length(min = 1, message = "Subject cannot be empty"))]
    pub subject: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub request_type: Option<RequestType>,
    pub status: Option<RequestStatus>,
    pub assigned_technician_id: Option<i32>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub duration_hours: Option<f64>,
    pub priority: Option<Priority>,
    pub notes: Option<String>,
}

/// Body for the status-only transition endpoint
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequestStatus {
    pub status: Option<RequestStatus>,
    /// Persisted only when the target status is `repaired`
    pub duration_hours: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn request(status: RequestStatus, scheduled: Option<DateTime<Utc>>) -> MaintenanceRequest {
        let now = Utc::now();
        MaintenanceRequest {
            id: 1,
            subject: "Conveyor belt misaligned".to_string(),
            description: None,
            request_type: RequestType::Corrective,
            status,
            equipment_id: 1,
            maintenance_team_id: Some(1),
            assigned_technician_id: None,
            requested_by_id: Some(1),
            scheduled_date: scheduled,
            completed_date: None,
            duration_hours: None,
            priority: Priority::High,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn overdue_requires_past_schedule_and_open_status() {
        let now = Utc::now();
        let past = now - Duration::hours(2);
        let future = now + Duration::hours(2);

        assert!(request(RequestStatus::New, Some(past)).is_overdue(now));
        assert!(request(RequestStatus::InProgress, Some(past)).is_overdue(now));
        assert!(!request(RequestStatus::New, Some(future)).is_overdue(now));
    }

    #[test]
    fn never_overdue_without_schedule() {
        let now = Utc::now();
        assert!(!request(RequestStatus::New, None).is_overdue(now));
        assert!(!request(RequestStatus::InProgress, None).is_overdue(now));
    }

    #[test]
    fn terminal_statuses_are_never_overdue() {
        let now = Utc::now();
        let past = now - Duration::hours(2);
        assert!(!request(RequestStatus::Repaired, Some(past)).is_overdue(now));
        assert!(!request(RequestStatus::Scrap, Some(past)).is_overdue(now));
    }

    #[test]
    fn request_type_serializes_as_type() {
        let req = request(RequestStatus::New, None);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["type"], "corrective");
        assert_eq!(json["status"], "new");
        assert!(json.get("requestType").is_none());
    }
}
