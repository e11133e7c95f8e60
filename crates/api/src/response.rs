//! Shared response body types for API handlers.

use serde::Serialize;
use utoipa::ToSchema;

/// Bare acknowledgement, e.g. `{"message": "updated"}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}
