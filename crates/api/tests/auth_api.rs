//! HTTP-level integration tests for `POST /login`.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, post_empty, post_json, post_raw_json};
use repotrack_api::auth::jwt::validate_token;
use repotrack_db::models::user::{CreateUser, User};
use repotrack_db::repositories::UserRepo;
use serde_json::json;
use sqlx::PgPool;

const PASSWORD: &str = "test_password_123!";

/// Create a test user directly in the database.
async fn create_test_user(pool: &PgPool, email: &str) -> User {
    let input = CreateUser {
        email: email.to_string(),
        password: PASSWORD.to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

/// Log in through the API and return the issued token.
async fn login_token(pool: &PgPool, body: serde_json::Value) -> String {
    let response = post_json(common::build_test_app(pool.clone()), "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"].as_str().unwrap().to_string()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_success_issues_two_hour_token(pool: PgPool) {
    let user = create_test_user(&pool, "dev@example.com").await;
    let app = common::build_test_app(pool.clone());

    let body = json!({ "username": "dev@example.com", "password": PASSWORD });
    let response = post_json(app, "/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let token = json["token"].as_str().expect("response must contain token");

    let claims = validate_token(token, &common::test_config().jwt).unwrap();
    assert_eq!(claims.user_id, user.user_id);
    assert_eq!(claims.email, "dev@example.com");
    assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);

    let reloaded = UserRepo::find_by_id(&pool, user.user_id).await.unwrap().unwrap();
    assert_eq!(reloaded.token.as_deref(), Some(token), "token must be persisted");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    let user = create_test_user(&pool, "wrongpw@example.com").await;
    let app = common::build_test_app(pool.clone());

    let body = json!({ "username": "wrongpw@example.com", "password": "incorrect" });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Invalid Credentials");

    let reloaded = UserRepo::find_by_id(&pool, user.user_id).await.unwrap().unwrap();
    assert!(reloaded.token.is_none(), "no token is stored on failure");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_unknown_email(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = json!({ "username": "ghost@example.com", "password": PASSWORD });
    let response = post_json(app, "/login", body).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "Invalid Credentials");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_missing_input(pool: PgPool) {
    for body in [
        json!({ "username": "dev@example.com" }),
        json!({ "password": PASSWORD }),
        json!({ "username": "", "password": PASSWORD }),
        json!({}),
    ] {
        let app = common::build_test_app(pool.clone());
        let response = post_json(app, "/login", body).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "All input is required");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_without_body_is_missing_input(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_empty(app, "/login").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "All input is required");

    let app = common::build_test_app(pool);
    let response = post_raw_json(app, "/login", "{\"username\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "All input is required");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_each_login_overwrites_stored_token(pool: PgPool) {
    let user = create_test_user(&pool, "twice@example.com").await;
    let body = json!({ "username": "twice@example.com", "password": PASSWORD });

    let first = login_token(&pool, body.clone()).await;

    // Tokens carry second-resolution timestamps; make sure the next one differs.
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let second = login_token(&pool, body).await;

    assert_ne!(first, second);
    let reloaded = UserRepo::find_by_id(&pool, user.user_id).await.unwrap().unwrap();
    assert_eq!(reloaded.token.as_deref(), Some(second.as_str()));
}
