//! Maintenance request lifecycle service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{RequestStatus, RequestType},
        request::{
            CreateRequest, NewRequest, RequestFilter, RequestWithRelations, UpdateRequest,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List requests with relations, optionally filtered
    pub async fn list(&self, filter: &RequestFilter) -> AppResult<Vec<RequestWithRelations>> {
        self.repository.requests.list_with_relations(filter).await
    }

    /// Get a request with relations by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<RequestWithRelations> {
        self.repository.requests.get_with_relations(id).await
    }

    /// Create a request against a piece of equipment. The maintenance team
    /// is inherited from the equipment and the status starts at `new`,
    /// whatever the caller sent.
    pub async fn create(&self, data: &CreateRequest) -> AppResult<RequestWithRelations> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let missing = || AppError::Validation("Required fields are missing".to_string());
        let subject = data.subject.clone().ok_or_else(missing)?;
        let request_type = data.request_type.ok_or_else(missing)?;
        let equipment_id = data.equipment_id.ok_or_else(missing)?;
        let requested_by_id = data.requested_by_id.ok_or_else(missing)?;
        let priority = data.priority.ok_or_else(missing)?;

        if request_type == RequestType::Preventive && data.scheduled_date.is_none() {
            return Err(AppError::Validation(
                "Scheduled date is required for preventive requests".to_string(),
            ));
        }

        let equipment = self.repository.equipment.get_by_id(equipment_id).await?;

        let new_request = NewRequest {
            subject,
            description: data.description.clone(),
            request_type,
            equipment_id,
            maintenance_team_id: equipment.maintenance_team_id,
            requested_by_id,
            scheduled_date: data.scheduled_date,
            priority,
            notes: data.notes.clone(),
        };

        let request = self.repository.requests.create(&new_request).await?;
        self.repository.requests.get_with_relations(request.id).await
    }

    /// Update a request's mutable fields
    pub async fn update(&self, id: i32, data: &UpdateRequest) -> AppResult<RequestWithRelations> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.requests.update(id, data).await?;
        self.repository.requests.get_with_relations(id).await
    }

    /// Move a request to a new workflow status. Transitions are permissive
    /// (any status may follow any other); entering `repaired` stamps the
    /// completion date and optionally the repair duration.
    pub async fn set_status(
        &self,
        id: i32,
        status: Option<RequestStatus>,
        duration_hours: Option<f64>,
    ) -> AppResult<RequestWithRelations> {
        let status =
            status.ok_or_else(|| AppError::Validation("Status is required".to_string()))?;

        self.repository
            .requests
            .set_status(id, status, duration_hours)
            .await?;
        self.repository.requests.get_with_relations(id).await
    }

    /// Delete a request
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.requests.delete(id).await
    }
}
