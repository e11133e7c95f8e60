//! PostgreSQL access layer: pool construction, row models, repositories.

use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod constraints;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool.
///
/// When `database_url` is `None` the connection parameters come from the
/// standard libpq variables (`PGHOST`, `PGPORT`, `PGUSER`, `PGPASSWORD`,
/// `PGDATABASE`), which [`PgConnectOptions::new`] reads itself.
pub async fn create_pool(
    database_url: Option<&str>,
    max_connections: u32,
) -> Result<DbPool, sqlx::Error> {
    let options = match database_url {
        Some(url) => PgConnectOptions::from_str(url)?,
        None => PgConnectOptions::new(),
    };

    tracing::debug!(
        host = options.get_host(),
        port = options.get_port(),
        max_connections,
        "Connecting to PostgreSQL"
    );

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to confirm the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
