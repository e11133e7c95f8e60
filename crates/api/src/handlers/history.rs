//! Handlers for the `/history` routes.

use std::fmt::Display;
use std::str::FromStr;

use axum::extract::{Query, State};
use axum::Json;
use repotrack_core::dates::parse_commit_date;
use repotrack_core::error::CoreError;
use repotrack_core::types::DbId;
use repotrack_core::validation::{require, require_text};
use repotrack_db::models::commit_history::{CommitHistoryEntry, CreateCommitHistoryEntry};
use repotrack_db::models::project::Project;
use repotrack_db::repositories::{CommitHistoryRepo, ProjectRepo};
use serde::{de, Deserialize, Deserializer};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::query::{DateRangeParams, IdParams};
use crate::response::MessageResponse;
use crate::state::AppState;

/// Request body for `POST /history/insert`.
///
/// Field names follow the wire format clients already send.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CommitHistoryBody {
    pub username: Option<String>,
    pub branch_name: Option<String>,
    /// `YYYY-MM-DD`, `DD-MM-YYYY`, or an RFC 3339 timestamp.
    pub commit_date: Option<String>,
    pub commit_id: Option<String>,
    /// Number or numeric string.
    #[serde(default, deserialize_with = "number_or_numeric_text")]
    pub no_of_deletion: Option<i32>,
    /// Number or numeric string.
    #[serde(default, deserialize_with = "number_or_numeric_text")]
    pub no_of_addition: Option<i32>,
    /// Number or numeric string.
    #[serde(default, deserialize_with = "number_or_numeric_text")]
    #[schema(value_type = Option<i64>)]
    pub project_id: Option<DbId>,
}

/// Accept `14` and `"14"` alike; front-ends often post form values as text.
fn number_or_numeric_text<'de, D, N>(deserializer: D) -> Result<Option<N>, D::Error>
where
    D: Deserializer<'de>,
    N: Deserialize<'de> + FromStr,
    N::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText<N> {
        Number(N),
        Text(String),
    }

    match Option::<NumberOrText<N>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrText::Number(n)) => Ok(Some(n)),
        Some(NumberOrText::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("expected a number, got '{text}': {e}"))),
    }
}

impl TryFrom<CommitHistoryBody> for CreateCommitHistoryEntry {
    type Error = CoreError;

    fn try_from(body: CommitHistoryBody) -> Result<Self, Self::Error> {
        let commit_date = require_text(body.commit_date, "commit_date")?;
        Ok(Self {
            project: require(body.project_id, "project_id")?,
            user_name: require_text(body.username, "username")?,
            branch_name: require_text(body.branch_name, "branch_name")?,
            commit_date: parse_commit_date(&commit_date, "commit_date")?,
            commit_id: require_text(body.commit_id, "commit_id")?,
            num_additions: require(body.no_of_addition, "no_of_addition")?,
            num_deletions: require(body.no_of_deletion, "no_of_deletion")?,
        })
    }
}

/// GET /history
#[utoipa::path(
    get,
    path = "/history",
    params(IdParams),
    responses(
        (status = 200, description = "All commit history for the project.", body = [CommitHistoryEntry]),
        (status = 400, description = "Missing or invalid id."),
    ),
    tag = "history"
)]
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<Vec<CommitHistoryEntry>>> {
    let entries = CommitHistoryRepo::list_by_project(&state.pool, params.id).await?;
    Ok(Json(entries))
}

/// GET /history/filterDate
#[utoipa::path(
    get,
    path = "/history/filterDate",
    params(DateRangeParams),
    responses(
        (status = 200, description = "Commit history within the inclusive date range.", body = [CommitHistoryEntry]),
        (status = 400, description = "Missing id or unparseable date."),
    ),
    tag = "history"
)]
pub async fn filter_by_date(
    State(state): State<AppState>,
    Query(params): Query<DateRangeParams>,
) -> AppResult<Json<Vec<CommitHistoryEntry>>> {
    let start = parse_commit_date(&params.start_date, "startDate")?;
    let end = parse_commit_date(&params.end_date, "endDate")?;

    let entries =
        CommitHistoryRepo::list_by_project_between(&state.pool, params.id, start, end).await?;
    Ok(Json(entries))
}

/// GET /history/header
///
/// Returns the project as a zero- or one-element array.
#[utoipa::path(
    get,
    path = "/history/header",
    params(IdParams),
    responses(
        (status = 200, description = "The matching project, if any.", body = [Project]),
        (status = 400, description = "Missing or invalid id."),
    ),
    tag = "history"
)]
pub async fn header(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<Json<Vec<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, params.id).await?;
    Ok(Json(project.into_iter().collect()))
}

/// POST /history/insert
#[utoipa::path(
    post,
    path = "/history/insert",
    request_body = CommitHistoryBody,
    responses(
        (status = 200, description = "Entry added.", body = MessageResponse),
        (status = 243, description = "project_id does not exist."),
        (status = 400, description = "Missing field or unparseable date."),
    ),
    tag = "history"
)]
pub async fn insert(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CommitHistoryBody>,
) -> AppResult<Json<MessageResponse>> {
    let entry = CreateCommitHistoryEntry::try_from(input)?;
    let created = CommitHistoryRepo::create(&state.pool, &entry).await?;

    tracing::info!(
        entry_id = created.id,
        project_id = created.project,
        "Commit history entry added"
    );
    Ok(Json(MessageResponse::new("added")))
}
