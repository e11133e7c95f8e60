//! Handlers for the `/project` and `/projects` routes.

use axum::extract::{Query, State};
use axum::Json;
use repotrack_core::error::CoreError;
use repotrack_core::validation::require_text;
use repotrack_db::models::project::{CreateProject, Project, UpdateProject};
use repotrack_db::repositories::ProjectRepo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::query::IdParams;
use crate::response::MessageResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for inserting or updating a project.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProjectBody {
    /// Project name.
    pub project: Option<String>,
    /// Repository URL; must be unique.
    pub link: Option<String>,
}

impl ProjectBody {
    fn into_fields(self) -> Result<(String, String), CoreError> {
        Ok((
            require_text(self.project, "project")?,
            require_text(self.link, "link")?,
        ))
    }
}

/// Response for a successful insert: the new row.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectAdded {
    /// Always `"added"`.
    pub message: String,
    pub data: Project,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /project/insert
#[utoipa::path(
    post,
    path = "/project/insert",
    request_body = ProjectBody,
    responses(
        (status = 200, description = "The added project.", body = ProjectAdded),
        (status = 400, description = "Missing field, or link already exists."),
    ),
    tag = "projects"
)]
pub async fn insert(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProjectBody>,
) -> AppResult<Json<ProjectAdded>> {
    let (project, link) = input.into_fields()?;
    let created = ProjectRepo::create(&state.pool, &CreateProject { project, link }).await?;

    tracing::info!(project_id = created.id, "Project added");
    Ok(Json(ProjectAdded {
        message: "added".to_string(),
        data: created,
    }))
}

/// DELETE /project/delete
#[utoipa::path(
    delete,
    path = "/project/delete",
    params(IdParams),
    responses(
        (status = 200, description = "Confirmation text with the deleted ID.", body = String),
        (status = 400, description = "Missing or invalid id."),
        (status = 500, description = "Storage failure."),
    ),
    tag = "projects"
)]
pub async fn delete(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<String> {
    let deleted = ProjectRepo::delete(&state.pool, params.id).await?;
    if !deleted {
        tracing::debug!(project_id = params.id, "Delete matched no project");
    }
    Ok(format!("Project deleted with ID: {}", params.id))
}

/// PUT /project/update
#[utoipa::path(
    put,
    path = "/project/update",
    params(IdParams),
    request_body = ProjectBody,
    responses(
        (status = 200, description = "Project updated.", body = MessageResponse),
        (status = 400, description = "Missing field, or link already exists."),
    ),
    tag = "projects"
)]
pub async fn update(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
    JsonBody(input): JsonBody<ProjectBody>,
) -> AppResult<Json<MessageResponse>> {
    let (project, link) = input.into_fields()?;
    let updated =
        ProjectRepo::update(&state.pool, params.id, &UpdateProject { project, link }).await?;
    if !updated {
        tracing::debug!(project_id = params.id, "Update matched no project");
    }
    Ok(Json(MessageResponse::new("updated")))
}

/// GET /projects
#[utoipa::path(
    get,
    path = "/projects",
    responses(
        (status = 200, description = "All projects in ID order.", body = [Project]),
    ),
    tag = "projects"
)]
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}
