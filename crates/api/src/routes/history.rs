//! Route definitions for commit history.
//!
//! Read routes are also registered with a trailing slash, which some clients
//! send.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::history;
use crate::state::AppState;

/// ```text
/// GET  /history               -> list
/// GET  /history/filterDate    -> filter_by_date
/// GET  /history/header        -> header
/// POST /history/insert        -> insert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/history", get(history::list))
        .route("/history/filterDate", get(history::filter_by_date))
        .route("/history/filterDate/", get(history::filter_by_date))
        .route("/history/header", get(history::header))
        .route("/history/header/", get(history::header))
        .route("/history/insert", post(history::insert))
}
