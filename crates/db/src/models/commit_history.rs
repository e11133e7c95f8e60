//! Commit history entity model and DTOs.

use repotrack_core::types::{CommitDate, DbId};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

/// A row from the `commit_history` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, ToSchema)]
#[schema(example = json!({
    "id": 18,
    "user_name": "user3",
    "branch_name": "dev",
    "commit_date": "2023-10-07",
    "commit_id": "commit8",
    "num_additions": 14,
    "num_deletions": 9,
    "project": 152
}))]
pub struct CommitHistoryEntry {
    #[schema(value_type = i64)]
    pub id: DbId,
    /// Owning project (`data.id`).
    #[schema(value_type = i64)]
    pub project: DbId,
    pub user_name: String,
    pub branch_name: String,
    #[schema(value_type = String, format = Date)]
    pub commit_date: CommitDate,
    pub commit_id: String,
    pub num_additions: i32,
    pub num_deletions: i32,
}

/// Validated input for inserting a commit history entry.
#[derive(Debug, Clone)]
pub struct CreateCommitHistoryEntry {
    pub project: DbId,
    pub user_name: String,
    pub branch_name: String,
    pub commit_date: CommitDate,
    pub commit_id: String,
    pub num_additions: i32,
    pub num_deletions: i32,
}
