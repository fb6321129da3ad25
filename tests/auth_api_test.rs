//! Authentication API integration tests
//!
//! Full HTTP round trips against the assembled router: login, whoami,
//! logout, the header-remapping shim, and the error contract.

#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::json;
use sqlx::SqlitePool;

use authgate::backend::routes::create_router;
use authgate::backend::server::AppState;
use common::auth_helpers::{auth_header, create_test_user};
use common::database::TestDatabase;

fn create_test_server(pool: &SqlitePool) -> TestServer {
    let app = create_router(AppState::new(pool.clone()));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_login_success_returns_token_and_user() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    create_test_user(db.pool(), "Alice", "alice@example.com", "password123", None)
        .await
        .unwrap();

    let response = server
        .post("/api/login")
        .json(&json!({
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["name"], "Alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
}

#[tokio::test]
async fn test_login_null_role_defaults_to_user() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    create_test_user(db.pool(), "Alice", "alice@example.com", "password123", None)
        .await
        .unwrap();

    let response = server
        .post("/api/login")
        .json(&json!({
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["role"], "user");
}

#[tokio::test]
async fn test_login_unknown_email_returns_422_with_field_error() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    let response = server
        .post("/api/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "whatever"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        json!({
            "errors": {
                "email": ["Les identifiants fournis sont incorrects."]
            }
        })
    );
}

#[tokio::test]
async fn test_login_wrong_password_is_indistinguishable_from_unknown_email() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    create_test_user(db.pool(), "Alice", "alice@example.com", "password123", None)
        .await
        .unwrap();

    let wrong_password = server
        .post("/api/login")
        .json(&json!({
            "email": "alice@example.com",
            "password": "not-the-password"
        }))
        .await;
    let unknown_email = server
        .post("/api/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "not-the-password"
        }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(unknown_email.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

    let a: serde_json::Value = wrong_password.json();
    let b: serde_json::Value = unknown_email.json();
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_me_round_trips_login_user() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    create_test_user(db.pool(), "Alice", "alice@example.com", "password123", None)
        .await
        .unwrap();

    let login = server
        .post("/api/login")
        .json(&json!({
            "email": "alice@example.com",
            "password": "password123"
        }))
        .await;
    let login_body: serde_json::Value = login.json();
    let token = login_body["token"].as_str().unwrap();

    let me = server
        .get("/api/me")
        .add_header("authorization", auth_header(token))
        .await;

    assert_eq!(me.status_code(), StatusCode::OK);
    let me_body: serde_json::Value = me.json();
    assert_eq!(me_body, login_body["user"]);
}

#[tokio::test]
async fn test_me_without_token_returns_401() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    let response = server.get("/api/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body, json!({"message": "Unauthenticated."}));
}

#[tokio::test]
async fn test_me_with_garbage_token_returns_401() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    let response = server
        .get("/api/me")
        .add_header("authorization", "Bearer not-a-real-token")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_alternate_auth_header_is_remapped() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    let user = create_test_user(db.pool(), "Alice", "alice@example.com", "password123", None)
        .await
        .unwrap();

    let response = server
        .get("/api/me")
        .add_header("x-authorization", auth_header(&user.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "alice@example.com");
}

#[tokio::test]
async fn test_standard_header_wins_over_alternate() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    let user = create_test_user(db.pool(), "Alice", "alice@example.com", "password123", None)
        .await
        .unwrap();

    // A dead alternate must not displace the live standard header
    let response = server
        .get("/api/me")
        .add_header("authorization", auth_header(&user.token))
        .add_header("x-authorization", "Bearer stale-token")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    let user = create_test_user(db.pool(), "Alice", "alice@example.com", "password123", None)
        .await
        .unwrap();

    let first = server
        .post("/api/logout")
        .add_header("authorization", auth_header(&user.token))
        .await;
    let second = server
        .post("/api/logout")
        .add_header("authorization", auth_header(&user.token))
        .await;

    assert_eq!(first.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(second.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_logout_without_token_still_returns_204() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    let response = server.post("/api/logout").await;

    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_token_is_dead_after_logout() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    let user = create_test_user(db.pool(), "Alice", "alice@example.com", "password123", None)
        .await
        .unwrap();

    let logout = server
        .post("/api/logout")
        .add_header("authorization", auth_header(&user.token))
        .await;
    assert_eq!(logout.status_code(), StatusCode::NO_CONTENT);

    let me = server
        .get("/api/me")
        .add_header("authorization", auth_header(&user.token))
        .await;
    assert_eq!(me.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let db = TestDatabase::new().await;
    let server = create_test_server(db.pool());

    create_test_user(db.pool(), "Alice", "alice@example.com", "password123", None)
        .await
        .unwrap();

    let response = server
        .post("/api/login")
        .json(&json!({
            "email": "Alice@Example.COM",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}
