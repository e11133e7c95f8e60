//! Session token issuance.
//!
//! - [`jwt`] -- HS256 token generation and validation.
//!
//! Password verification is done by the database; see
//! `repotrack_db::repositories::UserRepo::find_by_credentials`.

pub mod jwt;
