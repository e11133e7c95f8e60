//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and issue exactly one statement.

pub mod commit_history_repo;
pub mod project_repo;
pub mod user_repo;

pub use commit_history_repo::CommitHistoryRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
