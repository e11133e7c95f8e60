//! Repository for the `commit_history` table.

use repotrack_core::types::{CommitDate, DbId};
use sqlx::PgPool;

use crate::models::commit_history::{CommitHistoryEntry, CreateCommitHistoryEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project, user_name, branch_name, commit_date, commit_id, \
                       num_additions, num_deletions";

/// Provides insert and read operations for commit history.
///
/// Entries are append-only; there is no update or delete.
pub struct CommitHistoryRepo;

impl CommitHistoryRepo {
    /// Insert a commit history entry, returning the created row.
    ///
    /// Fails with a foreign key violation on `fk_project` if the project does
    /// not exist.
    pub async fn create(
        pool: &PgPool,
        input: &CreateCommitHistoryEntry,
    ) -> Result<CommitHistoryEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO commit_history
                (project, user_name, branch_name, commit_date, commit_id, num_additions, num_deletions)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CommitHistoryEntry>(&query)
            .bind(input.project)
            .bind(&input.user_name)
            .bind(&input.branch_name)
            .bind(input.commit_date)
            .bind(&input.commit_id)
            .bind(input.num_additions)
            .bind(input.num_deletions)
            .fetch_one(pool)
            .await
    }

    /// List every entry for a project in primary-key order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<CommitHistoryEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM commit_history WHERE project = $1 ORDER BY id");
        sqlx::query_as::<_, CommitHistoryEntry>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// List a project's entries whose commit date falls in `[start, end]`.
    ///
    /// Both bounds are inclusive. An inverted range yields no rows.
    pub async fn list_by_project_between(
        pool: &PgPool,
        project_id: DbId,
        start: CommitDate,
        end: CommitDate,
    ) -> Result<Vec<CommitHistoryEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM commit_history
             WHERE commit_date >= $1 AND commit_date <= $2 AND project = $3
             ORDER BY id"
        );
        sqlx::query_as::<_, CommitHistoryEntry>(&query)
            .bind(start)
            .bind(end)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
