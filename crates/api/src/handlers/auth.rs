//! Handler for `/login`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use repotrack_core::error::CoreError;
use repotrack_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::auth::jwt::generate_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /login`.
///
/// `username` carries the account's email address.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Successful login response.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// POST /login
///
/// Verify email + password in the database, issue a session token, and
/// record it on the user row. A missing or unreadable body counts as missing
/// input.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Signed session token.", body = TokenResponse),
        (status = 400, description = "Missing input or invalid credentials.", body = String),
        (status = 500, description = "Unexpected failure."),
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Json<TokenResponse>> {
    let input = match body {
        Ok(Json(input)) => input,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Unreadable login body");
            LoginRequest::default()
        }
    };

    let (email, password) = match (input.username, input.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "All input is required".into(),
            )))
        }
    };

    let user = UserRepo::find_by_credentials(&state.pool, &email, &password)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidCredentials))?;

    let token = generate_token(user.user_id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    UserRepo::store_token(&state.pool, user.user_id, &token).await?;

    tracing::info!(user_id = user.user_id, "User logged in");
    Ok(Json(TokenResponse { token }))
}
