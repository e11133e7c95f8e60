use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Built once at startup; cheap to clone (the pool and config are both
/// reference counted).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: repotrack_db::DbPool,
    /// Server configuration (token signing settings are read by `/login`).
    pub config: Arc<ServerConfig>,
}
