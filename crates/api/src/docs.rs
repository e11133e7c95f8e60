//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects every route annotated with `#[utoipa::path]`. The
//! router serves it as JSON at `/api-docs/openapi.json` with Swagger UI at
//! `/api-docs`.

use utoipa::OpenApi;

use crate::handlers::{auth, history, project};
use crate::routes::health;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "repotrack API",
        description = "Projects, their commit history, and session login backed by PostgreSQL."
    ),
    paths(
        auth::login,
        project::insert,
        project::delete,
        project::update,
        project::list,
        history::list,
        history::filter_by_date,
        history::header,
        history::insert,
        health::health_check,
    ),
    tags(
        (name = "auth", description = "Session token issuance"),
        (name = "projects", description = "Project CRUD"),
        (name = "history", description = "Per-project commit history"),
        (name = "health", description = "Liveness and database reachability")
    )
)]
pub struct ApiDoc;
