//! Names of the schema constraints the API reports on individually.
//!
//! These must match `db/migrations`. Every other constraint violation is
//! treated as an internal error.

/// Unique constraint on `data.link`.
pub const DATA_LINK_KEY: &str = "data_link_key";

/// Foreign key from `commit_history.project` to `data.id`.
pub const FK_PROJECT: &str = "fk_project";
