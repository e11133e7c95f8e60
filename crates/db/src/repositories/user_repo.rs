//! Repository for the `users` table.
//!
//! Password hashing and verification are done by PostgreSQL (pgcrypto), so
//! plaintext passwords are bound as query parameters and never compared in
//! process.

use repotrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::user::{CreateUser, User};

/// Column list shared across queries. Deliberately excludes `password`.
const COLUMNS: &str = "user_id, email, token";

/// Provides credential lookup and token bookkeeping for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, hashing the password with a bcrypt salt in SQL.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (email, password)
             VALUES ($1, crypt($2, gen_salt('bf')))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.email)
            .bind(&input.password)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, user_id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Find the user whose email matches and whose stored hash verifies
    /// against `password`.
    ///
    /// Returns `None` for an unknown email and for a wrong password alike.
    pub async fn find_by_credentials(
        pool: &PgPool,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE email = $1 AND password = crypt($2, password)"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(email)
            .bind(password)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the user's last-issued token.
    pub async fn store_token(pool: &PgPool, user_id: DbId, token: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET token = $1 WHERE user_id = $2")
            .bind(token)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
