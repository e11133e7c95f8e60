//! Route definitions for projects.
//!
//! Update and delete are also registered with a trailing slash, which some
//! clients send.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// ```text
/// GET    /projects          -> list
/// POST   /project/insert    -> insert
/// PUT    /project/update    -> update
/// DELETE /project/delete    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(project::list))
        .route("/project/insert", post(project::insert))
        .route("/project/update", put(project::update))
        .route("/project/update/", put(project::update))
        .route("/project/delete", delete(project::delete))
        .route("/project/delete/", delete(project::delete))
}
