//! Project entity model and DTOs.

use repotrack_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A project row from the `data` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
#[schema(example = json!({
    "id": 1,
    "project": "Project 1",
    "link": "https://github.com/project1.git"
}))]
pub struct Project {
    #[schema(value_type = i64)]
    pub id: DbId,
    /// Display name.
    pub project: String,
    /// Repository URL; unique across all projects.
    pub link: String,
}

/// Validated input for inserting a project.
#[derive(Debug, Clone)]
pub struct CreateProject {
    pub project: String,
    pub link: String,
}

/// Validated input for updating a project. Both columns are overwritten.
#[derive(Debug, Clone)]
pub struct UpdateProject {
    pub project: String,
    pub link: String,
}
