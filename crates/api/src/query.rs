//! Shared query parameter types for API handlers.

use repotrack_core::types::DbId;
use serde::Deserialize;
use utoipa::IntoParams;

/// `?id=` selecting a single project.
///
/// A missing or non-numeric id is rejected by the `Query` extractor with 400.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdParams {
    /// Project ID.
    #[param(value_type = i64)]
    pub id: DbId,
}

/// `?id=&startDate=&endDate=` for the commit history date filter.
///
/// Dates stay as strings here so that every accepted format is handled by
/// [`repotrack_core::dates::parse_commit_date`].
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct DateRangeParams {
    /// Project ID.
    #[param(value_type = i64)]
    pub id: DbId,
    /// Inclusive lower bound (`YYYY-MM-DD`, `DD-MM-YYYY` or RFC 3339).
    pub start_date: String,
    /// Inclusive upper bound (`YYYY-MM-DD`, `DD-MM-YYYY` or RFC 3339).
    pub end_date: String,
}
