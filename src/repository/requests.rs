//! Maintenance requests repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{
        employee::EmployeeRef,
        enums::RequestStatus,
        equipment::EquipmentRef,
        request::{
            MaintenanceRequest, NewRequest, RequestFilter, RequestWithRelations, UpdateRequest,
        },
        team::TeamRef,
    },
};

const RELATIONS_QUERY: &str = r#"
SELECT r.*,
       e.name AS equipment_name,
       e.serial_number AS equipment_serial,
       mt.name AS maintenance_team_name,
       tech.name AS assigned_technician_name,
       rb.name AS requested_by_name
FROM maintenance_requests r
LEFT JOIN equipment e ON r.equipment_id = e.id
LEFT JOIN maintenance_teams mt ON r.maintenance_team_id = mt.id
LEFT JOIN employees tech ON r.assigned_technician_id = tech.id
LEFT JOIN employees rb ON r.requested_by_id = rb.id
"#;

/// Request row joined with the names of its related entities
#[derive(sqlx::FromRow)]
struct RequestRelRow {
    #[sqlx(flatten)]
    request: MaintenanceRequest,
    equipment_name: Option<String>,
    equipment_serial: Option<String>,
    maintenance_team_name: Option<String>,
    assigned_technician_name: Option<String>,
    requested_by_name: Option<String>,
}

impl RequestRelRow {
    fn into_relations(self) -> RequestWithRelations {
        let RequestRelRow {
            request,
            equipment_name,
            equipment_serial,
            maintenance_team_name,
            assigned_technician_name,
            requested_by_name,
        } = self;

        let equipment = equipment_name
            .zip(equipment_serial)
            .map(|(name, serial_number)| EquipmentRef {
                id: request.equipment_id,
                name,
                serial_number,
            });
        let maintenance_team = request
            .maintenance_team_id
            .zip(maintenance_team_name)
            .map(|(id, name)| TeamRef { id, name });
        let assigned_technician = request
            .assigned_technician_id
            .zip(assigned_technician_name)
            .map(|(id, name)| EmployeeRef { id, name });
        let requested_by = request
            .requested_by_id
            .zip(requested_by_name)
            .map(|(id, name)| EmployeeRef { id, name });

        let is_overdue = request.is_overdue(Utc::now());

        RequestWithRelations {
            request,
            equipment,
            maintenance_team,
            assigned_technician,
            requested_by,
            is_overdue,
        }
    }
}

#[derive(Clone)]
pub struct RequestsRepository {
    pool: Pool<Postgres>,
}

impl RequestsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a request with resolved relations and the overdue flag
    pub async fn get_with_relations(&self, id: i32) -> AppResult<RequestWithRelations> {
        let query = format!("{} WHERE r.id = $1", RELATIONS_QUERY);
        let row = sqlx::query_as::<_, RequestRelRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))?;
        Ok(row.into_relations())
    }

    /// List requests with resolved relations, newest first, optionally
    /// filtered by status, equipment or team
    pub async fn list_with_relations(
        &self,
        filter: &RequestFilter,
    ) -> AppResult<Vec<RequestWithRelations>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if filter.status.is_some() {
            conditions.push(format!("r.status = ${}", idx));
            idx += 1;
        }
        if filter.equipment_id.is_some() {
            conditions.push(format!("r.equipment_id = ${}", idx));
            idx += 1;
        }
        if filter.team_id.is_some() {
            conditions.push(format!("r.maintenance_team_id = ${}", idx));
            idx += 1;
        }
        let _ = idx;

        let mut query = RELATIONS_QUERY.to_string();
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY r.created_at DESC");

        let mut builder = sqlx::query_as::<_, RequestRelRow>(&query);
        if let Some(status) = filter.status {
            builder = builder.bind(status);
        }
        if let Some(equipment_id) = filter.equipment_id {
            builder = builder.bind(equipment_id);
        }
        if let Some(team_id) = filter.team_id {
            builder = builder.bind(team_id);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows.into_iter().map(RequestRelRow::into_relations).collect())
    }

    /// Create a request; status always starts at `new`
    pub async fn create(&self, data: &NewRequest) -> AppResult<MaintenanceRequest> {
        let row = sqlx::query_as::<_, MaintenanceRequest>(
            r#"
            INSERT INTO maintenance_requests
                (subject, description, request_type, status, equipment_id,
                 maintenance_team_id, requested_by_id, scheduled_date, priority, notes)
            VALUES ($1, $2, $3, 'new', $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(&data.subject)
        .bind(&data.description)
        .bind(data.request_type)
        .bind(data.equipment_id)
        .bind(data.maintenance_team_id)
        .bind(data.requested_by_id)
        .bind(data.scheduled_date)
        .bind(data.priority)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::foreign_key_violation(e, "Referenced employee does not exist"))?;
        Ok(row)
    }

    /// Update a request; only the safelisted fields are writable
    pub async fn update(&self, id: i32, data: &UpdateRequest) -> AppResult<MaintenanceRequest> {
        let now = Utc::now();
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.subject, "subject");
        add_field!(data.description, "description");
        add_field!(data.request_type, "request_type");
        add_field!(data.status, "status");
        add_field!(data.assigned_technician_id, "assigned_technician_id");
        add_field!(data.scheduled_date, "scheduled_date");
        add_field!(data.completed_date, "completed_date");
        add_field!(data.duration_hours, "duration_hours");
        add_field!(data.priority, "priority");
        add_field!(data.notes, "notes");
        let _ = idx;

        let query = format!(
            "UPDATE maintenance_requests SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, MaintenanceRequest>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.subject);
        bind_field!(data.description);
        bind_field!(data.request_type);
        bind_field!(data.status);
        bind_field!(data.assigned_technician_id);
        bind_field!(data.scheduled_date);
        bind_field!(data.completed_date);
        bind_field!(data.duration_hours);
        bind_field!(data.priority);
        bind_field!(data.notes);

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Apply a status transition. Entering `repaired` stamps the completion
    /// date and, when supplied, the repair duration; other targets leave
    /// both fields untouched.
    pub async fn set_status(
        &self,
        id: i32,
        status: RequestStatus,
        duration_hours: Option<f64>,
    ) -> AppResult<MaintenanceRequest> {
        let now = Utc::now();

        let row = if status == RequestStatus::Repaired {
            if let Some(hours) = duration_hours {
                sqlx::query_as::<_, MaintenanceRequest>(
                    r#"
                    UPDATE maintenance_requests
                    SET status = $1, completed_date = $2, duration_hours = $3, updated_at = $2
                    WHERE id = $4
                    RETURNING *
                    "#,
                )
                .bind(status)
                .bind(now)
                .bind(hours)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            } else {
                sqlx::query_as::<_, MaintenanceRequest>(
                    r#"
                    UPDATE maintenance_requests
                    SET status = $1, completed_date = $2, updated_at = $2
                    WHERE id = $3
                    RETURNING *
                    "#,
                )
                .bind(status)
                .bind(now)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?
            }
        } else {
            sqlx::query_as::<_, MaintenanceRequest>(
                "UPDATE maintenance_requests SET status = $1, updated_at = $2 WHERE id = $3 RETURNING *",
            )
            .bind(status)
            .bind(now)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
        };

        row.ok_or_else(|| AppError::NotFound(format!("Request {} not found", id)))
    }

    /// Hard delete
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance_requests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Request {} not found", id)));
        }
        Ok(())
    }
}
