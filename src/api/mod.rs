//! API handlers for the GearGuard REST endpoints

pub mod dashboard;
pub mod departments;
pub mod employees;
pub mod equipment;
pub mod health;
pub mod openapi;
pub mod requests;
pub mod teams;

use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope wrapping every data payload
#[derive(Serialize)]
pub struct ApiResponse<T> {
    /// Always "success"
    pub status: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            status: "success".to_string(),
            data,
        }
    }
}

/// Success envelope for acknowledgements without a payload
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    /// Always "success"
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
        }
    }
}
