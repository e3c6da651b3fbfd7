//! Maintenance teams repository for database operations

use std::collections::HashMap;

use chrono::Utc;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        employee::Employee,
        team::{MaintenanceTeam, NewTeam, TeamWithMembers, UpdateTeam},
    },
};

/// Membership row joined with the employee record
#[derive(sqlx::FromRow)]
struct TeamMemberRow {
    team_id: i32,
    #[sqlx(flatten)]
    employee: Employee,
}

#[derive(Clone)]
pub struct TeamsRepository {
    pool: Pool<Postgres>,
}

impl TeamsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all teams
    pub async fn list(&self) -> AppResult<Vec<MaintenanceTeam>> {
        let rows =
            sqlx::query_as::<_, MaintenanceTeam>("SELECT * FROM maintenance_teams ORDER BY name")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows)
    }

    /// Get team by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<MaintenanceTeam> {
        sqlx::query_as::<_, MaintenanceTeam>("SELECT * FROM maintenance_teams WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))
    }

    /// Get a team with its members and derived counts
    pub async fn get_with_members(&self, id: i32) -> AppResult<TeamWithMembers> {
        let team = self.get_by_id(id).await?;

        // Member ids that no longer resolve to an employee are dropped by the join
        let members = sqlx::query_as::<_, Employee>(
            r#"
            SELECT e.*
            FROM employees e
            INNER JOIN team_members tm ON e.id = tm.employee_id
            WHERE tm.team_id = $1
            ORDER BY e.name
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        let equipment_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM equipment WHERE maintenance_team_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        let open_request_count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM maintenance_requests
            WHERE maintenance_team_id = $1 AND status NOT IN ('repaired', 'scrap')
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        let member_ids = members.iter().map(|m| m.id).collect();

        Ok(TeamWithMembers {
            team,
            members,
            member_ids,
            equipment_count,
            open_request_count,
        })
    }

    /// List all teams with members and counts. Members and counts are
    /// fetched once and grouped by team id rather than re-queried per team.
    pub async fn list_with_members(&self) -> AppResult<Vec<TeamWithMembers>> {
        let teams = self.list().await?;

        let member_rows = sqlx::query_as::<_, TeamMemberRow>(
            r#"
            SELECT tm.team_id, e.*
            FROM team_members tm
            INNER JOIN employees e ON e.id = tm.employee_id
            ORDER BY e.name
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut members_by_team: HashMap<i32, Vec<Employee>> = HashMap::new();
        for row in member_rows {
            members_by_team
                .entry(row.team_id)
                .or_default()
                .push(row.employee);
        }

        let equipment_counts = self
            .counts_by_team("SELECT maintenance_team_id, COUNT(*) AS count FROM equipment WHERE maintenance_team_id IS NOT NULL GROUP BY maintenance_team_id")
            .await?;

        let open_request_counts = self
            .counts_by_team(
                r#"
                SELECT maintenance_team_id, COUNT(*) AS count
                FROM maintenance_requests
                WHERE maintenance_team_id IS NOT NULL
                  AND status NOT IN ('repaired', 'scrap')
                GROUP BY maintenance_team_id
                "#,
            )
            .await?;

        let result = teams
            .into_iter()
            .map(|team| {
                let members = members_by_team.remove(&team.id).unwrap_or_default();
                let member_ids = members.iter().map(|m| m.id).collect();
                let equipment_count = equipment_counts.get(&team.id).copied().unwrap_or(0);
                let open_request_count = open_request_counts.get(&team.id).copied().unwrap_or(0);
                TeamWithMembers {
                    team,
                    members,
                    member_ids,
                    equipment_count,
                    open_request_count,
                }
            })
            .collect();

        Ok(result)
    }

    async fn counts_by_team(&self, query: &str) -> AppResult<HashMap<i32, i64>> {
        let rows = sqlx::query(query).fetch_all(&self.pool).await?;
        Ok(rows
            .into_iter()
            .map(|row| {
                (
                    row.get::<i32, _>("maintenance_team_id"),
                    row.get::<i64, _>("count"),
                )
            })
            .collect())
    }

    /// Create a team together with its membership rows in one transaction
    pub async fn create(&self, data: &NewTeam) -> AppResult<MaintenanceTeam> {
        let mut tx = self.pool.begin().await?;

        let team = sqlx::query_as::<_, MaintenanceTeam>(
            "INSERT INTO maintenance_teams (name, description) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::unique_violation(e, "A team with this name already exists"))?;

        for employee_id in &data.member_ids {
            sqlx::query("INSERT INTO team_members (team_id, employee_id) VALUES ($1, $2)")
                .bind(team.id)
                .bind(employee_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::foreign_key_violation(e, "One or more member ids do not exist")
                })?;
        }

        tx.commit().await?;
        Ok(team)
    }

    /// Update a team; when `member_ids` is provided the membership set is
    /// replaced wholesale. Both writes commit or roll back together.
    pub async fn update(&self, id: i32, data: &UpdateTeam) -> AppResult<MaintenanceTeam> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let team = sqlx::query_as::<_, MaintenanceTeam>(
            r#"
            UPDATE maintenance_teams
            SET updated_at = $1,
                name = COALESCE($2, name),
                description = COALESCE($3, description)
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(now)
        .bind(data.name.as_deref())
        .bind(data.description.as_deref())
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::unique_violation(e, "A team with this name already exists"))?
        .ok_or_else(|| AppError::NotFound(format!("Team {} not found", id)))?;

        if let Some(ref member_ids) = data.member_ids {
            sqlx::query("DELETE FROM team_members WHERE team_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;

            for employee_id in member_ids {
                sqlx::query("INSERT INTO team_members (team_id, employee_id) VALUES ($1, $2)")
                    .bind(id)
                    .bind(employee_id)
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| {
                        AppError::foreign_key_violation(e, "One or more member ids do not exist")
                    })?;
            }
        }

        tx.commit().await?;
        Ok(team)
    }

    /// Delete a team; membership rows cascade, equipment and requests keep
    /// a nulled team reference
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Team {} not found", id)));
        }
        Ok(())
    }
}
