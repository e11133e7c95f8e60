use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use repotrack_core::error::CoreError;
use repotrack_db::constraints::{DATA_LINK_KEY, FK_PROJECT};
use serde_json::json;

/// Status returned when a commit history entry names an unknown project.
///
/// Non-standard, kept for compatibility with existing clients that match on
/// it.
pub const UNKNOWN_PROJECT_STATUS: u16 = 243;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`]; storage details are logged, never returned.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `repotrack_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) => core_error_response(core),
            AppError::Database(err) => match classify_sqlx_error(&err) {
                Some(core) => core_error_response(core),
                None => {
                    tracing::error!(error = %err, "Database error");
                    internal_error_response()
                }
            },
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error_response()
            }
        }
    }
}

/// Map a domain error to its public status and body.
///
/// Input problems answer in plain text; constraint violations answer with a
/// JSON `{"error": ...}` object.
fn core_error_response(err: CoreError) -> Response {
    match err {
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
        CoreError::InvalidCredentials => {
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        }
        CoreError::DuplicateLink => {
            let body = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        }
        CoreError::UnknownProject => {
            let status =
                StatusCode::from_u16(UNKNOWN_PROJECT_STATUS).unwrap_or(StatusCode::CONFLICT);
            let body = json!({ "error": err.to_string() });
            (status, axum::Json(body)).into_response()
        }
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            internal_error_response()
        }
    }
}

fn internal_error_response() -> Response {
    let body = json!({
        "error": "An internal error occurred",
        "code": "INTERNAL_ERROR",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
}

/// Classify a sqlx error into a domain error where the API reports it
/// individually.
///
/// - Unique violation (23505) on `data_link_key` -> [`CoreError::DuplicateLink`].
/// - Foreign key violation (23503) on `fk_project` -> [`CoreError::UnknownProject`].
/// - Everything else -> `None` (sanitized 500).
pub fn classify_sqlx_error(err: &sqlx::Error) -> Option<CoreError> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };

    match (db_err.code().as_deref(), db_err.constraint()) {
        (Some("23505"), Some(DATA_LINK_KEY)) => Some(CoreError::DuplicateLink),
        (Some("23503"), Some(FK_PROJECT)) => Some(CoreError::UnknownProject),
        _ => None,
    }
}
