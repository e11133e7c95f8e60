pub mod auth;
pub mod health;
pub mod history;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// Paths are mounted at the root to stay wire-compatible with existing
/// clients.
///
/// ```text
/// /login                      login (public)
///
/// /projects                   list
/// /project/insert             insert (POST)
/// /project/update?id=         update (PUT)
/// /project/delete?id=         delete (DELETE)
///
/// /history?id=                list by project
/// /history/filterDate?id=&startDate=&endDate=
///                             list by project within dates
/// /history/header?id=         project lookup as array
/// /history/insert             insert (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(project::router())
        .merge(history::router())
}
