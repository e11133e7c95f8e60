//! User entity model and DTOs.

use repotrack_core::types::DbId;
use sqlx::FromRow;

/// A user row from the `users` table, minus the password hash.
///
/// The hash never leaves the database: verification happens in SQL via
/// pgcrypto's `crypt()`.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub user_id: DbId,
    pub email: String,
    /// The most recently issued session token, if any.
    pub token: Option<String>,
}

/// DTO for creating a user. `password` is plaintext; it is hashed by the
/// database on insert.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
}
