//! Row structs and insert DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO holding already-validated input

pub mod commit_history;
pub mod project;
pub mod user;
