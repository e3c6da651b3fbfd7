//! Equipment repository for database operations

use std::collections::HashMap;

use chrono::Utc;
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        department::DepartmentRef,
        employee::EmployeeRef,
        equipment::{Equipment, EquipmentWithRelations, NewEquipment, UpdateEquipment},
        team::TeamRef,
    },
};

const RELATIONS_QUERY: &str = r#"
SELECT e.*,
       d.name AS department_name,
       ae.name AS assigned_employee_name,
       mt.name AS maintenance_team_name,
       dt.name AS default_technician_name
FROM equipment e
LEFT JOIN departments d ON e.department_id = d.id
LEFT JOIN employees ae ON e.assigned_employee_id = ae.id
LEFT JOIN maintenance_teams mt ON e.maintenance_team_id = mt.id
LEFT JOIN employees dt ON e.default_technician_id = dt.id
"#;

/// Equipment row joined with the names of its related entities
#[derive(sqlx::FromRow)]
struct EquipmentRelRow {
    #[sqlx(flatten)]
    equipment: Equipment,
    department_name: Option<String>,
    assigned_employee_name: Option<String>,
    maintenance_team_name: Option<String>,
    default_technician_name: Option<String>,
}

impl EquipmentRelRow {
    fn into_relations(self, open_request_count: i64) -> EquipmentWithRelations {
        let EquipmentRelRow {
            equipment,
            department_name,
            assigned_employee_name,
            maintenance_team_name,
            default_technician_name,
        } = self;

        let department = equipment
            .department_id
            .zip(department_name)
            .map(|(id, name)| DepartmentRef { id, name });
        let assigned_employee = equipment
            .assigned_employee_id
            .zip(assigned_employee_name)
            .map(|(id, name)| EmployeeRef { id, name });
        let maintenance_team = equipment
            .maintenance_team_id
            .zip(maintenance_team_name)
            .map(|(id, name)| TeamRef { id, name });
        let default_technician = equipment
            .default_technician_id
            .zip(default_technician_name)
            .map(|(id, name)| EmployeeRef { id, name });

        EquipmentWithRelations {
            equipment,
            department,
            assigned_employee,
            maintenance_team,
            default_technician,
            open_request_count,
        }
    }
}

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a bare equipment row
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Get equipment with resolved relations and its open request count
    pub async fn get_with_relations(&self, id: i32) -> AppResult<EquipmentWithRelations> {
        let query = format!("{} WHERE e.id = $1", RELATIONS_QUERY);
        let row = sqlx::query_as::<_, EquipmentRelRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))?;

        let open_request_count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM maintenance_requests
            WHERE equipment_id = $1 AND status NOT IN ('repaired', 'scrap')
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_relations(open_request_count))
    }

    /// List equipment with resolved relations, optionally filtered by the
    /// active flag. Open request counts are fetched once, grouped by
    /// equipment id, instead of re-scanning requests per row.
    pub async fn list_with_relations(
        &self,
        is_active: Option<bool>,
    ) -> AppResult<Vec<EquipmentWithRelations>> {
        let mut query = RELATIONS_QUERY.to_string();
        if is_active.is_some() {
            query.push_str(" WHERE e.is_active = $1");
        }
        query.push_str(" ORDER BY e.name");

        let mut builder = sqlx::query_as::<_, EquipmentRelRow>(&query);
        if let Some(active) = is_active {
            builder = builder.bind(active);
        }
        let rows = builder.fetch_all(&self.pool).await?;

        let counts = self.open_request_counts().await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let count = counts.get(&row.equipment.id).copied().unwrap_or(0);
                row.into_relations(count)
            })
            .collect())
    }

    /// Open request counts grouped by equipment id
    async fn open_request_counts(&self) -> AppResult<HashMap<i32, i64>> {
        let rows = sqlx::query(
            r#"
            SELECT equipment_id, COUNT(*) AS count
            FROM maintenance_requests
            WHERE status NOT IN ('repaired', 'scrap')
            GROUP BY equipment_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.get::<i32, _>("equipment_id"), row.get::<i64, _>("count")))
            .collect())
    }

    /// Create equipment
    pub async fn create(&self, data: &NewEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment
                (name, serial_number, category, department_id, assigned_employee_id,
                 maintenance_team_id, default_technician_id, location, purchase_date,
                 warranty_expiry_date, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.serial_number)
        .bind(data.category)
        .bind(data.department_id)
        .bind(data.assigned_employee_id)
        .bind(data.maintenance_team_id)
        .bind(data.default_technician_id)
        .bind(&data.location)
        .bind(data.purchase_date)
        .bind(data.warranty_expiry_date)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::unique_violation(e, "Equipment with this serial number already exists")
        })?;
        Ok(row)
    }

    /// Update equipment; only provided fields are written
    pub async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment> {
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

        add_field!(data.name, "name");
        add_field!(data.serial_number, "serial_number");
        add_field!(data.category, "category");
        add_field!(data.department_id, "department_id");
        add_field!(data.assigned_employee_id, "assigned_employee_id");
        add_field!(data.maintenance_team_id, "maintenance_team_id");
        add_field!(data.default_technician_id, "default_technician_id");
        add_field!(data.location, "location");
        add_field!(data.purchase_date, "purchase_date");
        add_field!(data.warranty_expiry_date, "warranty_expiry_date");
        add_field!(data.notes, "notes");
        add_field!(data.is_active, "is_active");
        add_field!(data.image_url, "image_url");
        let _ = idx;

        let query = format!(
            "UPDATE equipment SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Equipment>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.serial_number);
        bind_field!(data.category);
        bind_field!(data.department_id);
        bind_field!(data.assigned_employee_id);
        bind_field!(data.maintenance_team_id);
        bind_field!(data.default_technician_id);
        bind_field!(data.location);
        bind_field!(data.purchase_date);
        bind_field!(data.warranty_expiry_date);
        bind_field!(data.notes);
        bind_field!(data.is_active);
        bind_field!(data.image_url);

        builder
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::unique_violation(e, "Equipment with this serial number already exists")
            })?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Delete equipment; dependent maintenance requests cascade
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }
}
