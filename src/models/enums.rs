//! Shared domain enums (backed by Postgres enum types)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EmployeeRole
// ---------------------------------------------------------------------------

/// Employee role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "employee_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    Admin,
    Manager,
    Technician,
    User,
}

impl std::fmt::Display for EmployeeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EmployeeRole::Admin => "Admin",
            EmployeeRole::Manager => "Manager",
            EmployeeRole::Technician => "Technician",
            EmployeeRole::User => "User",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// EquipmentCategory
// ---------------------------------------------------------------------------

/// Equipment category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "equipment_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EquipmentCategory {
    Machine,
    Vehicle,
    Computer,
    Other,
}

impl std::fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentCategory::Machine => "Machine",
            EquipmentCategory::Vehicle => "Vehicle",
            EquipmentCategory::Computer => "Computer",
            EquipmentCategory::Other => "Other",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// RequestType
// ---------------------------------------------------------------------------

/// Maintenance request type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "request_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Unplanned repair triggered by a failure
    Corrective,
    /// Planned, scheduled maintenance
    Preventive,
}

impl std::fmt::Display for RequestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RequestType::Corrective => "Corrective",
            RequestType::Preventive => "Preventive",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// RequestStatus
// ---------------------------------------------------------------------------

/// Maintenance request workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "request_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    New,
    InProgress,
    Repaired,
    Scrap,
}

impl RequestStatus {
    /// A request is open while it has not reached a terminal status.
    pub fn is_open(&self) -> bool {
        !self.is_terminal()
    }

    /// `repaired` and `scrap` are terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestStatus::Repaired | RequestStatus::Scrap)
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RequestStatus::New => "New",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Repaired => "Repaired",
            RequestStatus::Scrap => "Scrap",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// Maintenance request priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "request_priority", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_and_terminal_states() {
        assert!(RequestStatus::New.is_open());
        assert!(RequestStatus::InProgress.is_open());
        assert!(!RequestStatus::Repaired.is_open());
        assert!(!RequestStatus::Scrap.is_open());
        assert!(RequestStatus::Repaired.is_terminal());
        assert!(RequestStatus::Scrap.is_terminal());
    }

    #[test]
    fn status_wire_labels() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let status: RequestStatus = serde_json::from_str("\"scrap\"").unwrap();
        assert_eq!(status, RequestStatus::Scrap);
    }

    #[test]
    fn category_wire_labels() {
        assert_eq!(
            serde_json::to_string(&EquipmentCategory::Machine).unwrap(),
            "\"machine\""
        );
        let role: EmployeeRole = serde_json::from_str("\"technician\"").unwrap();
        assert_eq!(role, EmployeeRole::Technician);
    }
}
