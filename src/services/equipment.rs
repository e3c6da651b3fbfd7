//! Equipment service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, EquipmentWithRelations, NewEquipment, UpdateEquipment},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List equipment with relations, optionally filtered by the active flag
    pub async fn list(&self, is_active: Option<bool>) -> AppResult<Vec<EquipmentWithRelations>> {
        self.repository.equipment.list_with_relations(is_active).await
    }

    /// Get equipment with relations by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<EquipmentWithRelations> {
        self.repository.equipment.get_with_relations(id).await
    }

    /// Create equipment. The maintenance team must exist; it becomes the
    /// team copied onto every request raised against this equipment.
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<EquipmentWithRelations> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let missing = || AppError::Validation("Required fields are missing".to_string());
        let new_equipment = NewEquipment {
            name: data.name.clone().ok_or_else(missing)?,
            serial_number: data.serial_number.clone().ok_or_else(missing)?,
            category: data.category.ok_or_else(missing)?,
            department_id: data.department_id.ok_or_else(missing)?,
            assigned_employee_id: data.assigned_employee_id,
            maintenance_team_id: data.maintenance_team_id.ok_or_else(missing)?,
            default_technician_id: data.default_technician_id,
            location: data.location.clone().ok_or_else(missing)?,
            purchase_date: data.purchase_date.ok_or_else(missing)?,
            warranty_expiry_date: data.warranty_expiry_date,
            notes: data.notes.clone(),
        };

        // The servicing team must resolve at creation time
        self.repository
            .teams
            .get_by_id(new_equipment.maintenance_team_id)
            .await?;
        self.repository
            .departments
            .get_by_id(new_equipment.department_id)
            .await?;

        let equipment = self.repository.equipment.create(&new_equipment).await?;
        self.repository
            .equipment
            .get_with_relations(equipment.id)
            .await
    }

    /// Update equipment
    pub async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<EquipmentWithRelations> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(team_id) = data.maintenance_team_id {
            self.repository.teams.get_by_id(team_id).await?;
        }

        self.repository.equipment.update(id, data).await?;
        self.repository.equipment.get_with_relations(id).await
    }

    /// Delete equipment and, through the store cascade, all of its requests
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.equipment.delete(id).await
    }
}
