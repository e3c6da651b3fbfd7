//! Dashboard statistics snapshot

use serde::Serialize;
use utoipa::ToSchema;

/// Aggregate counters shown on the dashboard, computed lazily at read time
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_equipment: i64,
    /// Equipment with the active flag set
    pub active_equipment: i64,
    pub total_requests: i64,
    /// Requests with status `new`
    pub open_requests: i64,
    pub in_progress_requests: i64,
    /// Requests with status `repaired`
    pub completed_requests: i64,
    /// Open requests whose scheduled date has passed
    pub overdue_requests: i64,
    pub total_teams: i64,
    /// Mean duration of repaired requests carrying a duration; 0 when none
    pub avg_repair_time: f64,
}
