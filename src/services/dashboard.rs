//! Dashboard statistics service

use sqlx::Row;

use crate::{error::AppResult, models::dashboard::DashboardStats, repository::Repository};

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
}

impl DashboardService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Compute the dashboard snapshot from current store state
    pub async fn get_stats(&self) -> AppResult<DashboardStats> {
        let pool = &self.repository.pool;

        let equipment_row = sqlx::query(
            r#"
            SELECT COUNT(*) AS total,
                   COUNT(*) FILTER (WHERE is_active) AS active
            FROM equipment
            "#,
        )
        .fetch_one(pool)
        .await?;

        let request_row = sqlx::query(
            r#"
            SELECT COUNT(*) AS total,
                   COUNT(*) FILTER (WHERE status = 'new') AS open,
                   COUNT(*) FILTER (WHERE status = 'in_progress') AS in_progress,
                   COUNT(*) FILTER (WHERE status = 'repaired') AS completed
            FROM maintenance_requests
            "#,
        )
        .fetch_one(pool)
        .await?;

        let overdue_requests: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM maintenance_requests
            WHERE scheduled_date < NOW()
              AND status NOT IN ('repaired', 'scrap')
            "#,
        )
        .fetch_one(pool)
        .await?;

        let total_teams: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_teams")
            .fetch_one(pool)
            .await?;

        // AVG is NULL when no repaired request carries a duration
        let avg_repair_time: Option<f64> = sqlx::query_scalar(
            r#"
            SELECT AVG(duration_hours)
            FROM maintenance_requests
            WHERE status = 'repaired' AND duration_hours IS NOT NULL
            "#,
        )
        .fetch_one(pool)
        .await?;

        Ok(DashboardStats {
            total_equipment: equipment_row.get("total"),
            active_equipment: equipment_row.get("active"),
            total_requests: request_row.get("total"),
            open_requests: request_row.get("open"),
            in_progress_requests: request_row.get("in_progress"),
            completed_requests: request_row.get("completed"),
            overdue_requests,
            total_teams,
            avg_repair_time: avg_repair_time.unwrap_or(0.0),
        })
    }
}
