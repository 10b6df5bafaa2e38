//! HTTP API Integration Tests
//!
//! Drives the full router against an in-memory database, one request at a
//! time via `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use todolist_server::repository::init_db_in_memory;
use todolist_server::{routes, AppState};

fn app() -> Router {
    let db = init_db_in_memory().expect("db init failed");
    routes::router(AppState::new(db, "test-secret"))
}

async fn send(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn register_and_login(app: &Router, username: &str) -> String {
    let (status, _) = send(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "password123",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(
        app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": username, "password": "password123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["access_token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_index_lists_endpoints() {
    let app = app();
    let (status, body) = send(&app, "GET", "/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["endpoints"]["todos"], "/api/todos");
}

#[tokio::test]
async fn test_register_returns_user_without_hash() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "secret123",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");
    assert_eq!(body["user"]["username"], "alice");
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_missing_fields() {
    let app = app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({ "username": "bob" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required fields");
}

#[tokio::test]
async fn test_register_duplicate_username_and_email() {
    let app = app();
    register_and_login(&app, "carol").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "username": "carol",
            "email": "new@example.com",
            "password": "pw",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Username already exists");

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "username": "carol2",
            "email": "carol@example.com",
            "password": "pw",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Email already exists");
}

#[tokio::test]
async fn test_login_rejects_bad_credentials() {
    let app = app();
    register_and_login(&app, "dave").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "dave", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid username or password");

    let (status, _) = send(
        &app,
        "POST",
        "/api/auth/login",
        None,
        Some(json!({ "username": "nobody", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_me_requires_token() {
    let app = app();

    let (status, _) = send(&app, "GET", "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, "GET", "/api/auth/me", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = register_and_login(&app, "erin").await;
    let (status, body) = send(&app, "GET", "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "erin");
}

#[tokio::test]
async fn test_todo_crud_flow() {
    let app = app();
    let token = register_and_login(&app, "frank").await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/todos/",
        Some(&token),
        Some(json!({
            "title": "Learn Rust",
            "description": "Ownership and borrowing",
            "due_date": "2026-12-31T23:59:59",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["completed"], false);
    assert_eq!(created["due_date"], "2026-12-31T23:59:59");

    let (status, listed) = send(&app, "GET", "/api/todos/", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, fetched) =
        send(&app, "GET", &format!("/api/todos/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["title"], "Learn Rust");

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/todos/{}", id),
        Some(&token),
        Some(json!({ "completed": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["completed"], true);
    assert_eq!(updated["title"], "Learn Rust");

    let (status, deleted) = send(
        &app,
        "DELETE",
        &format!("/api/todos/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Todo deleted successfully");

    let (status, _) = send(&app, "GET", &format!("/api/todos/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_todo_requires_title() {
    let app = app();
    let token = register_and_login(&app, "grace").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/todos/",
        Some(&token),
        Some(json!({ "description": "no title" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Title is required");
}

#[tokio::test]
async fn test_create_todo_rejects_bad_due_date() {
    let app = app();
    let token = register_and_login(&app, "heidi").await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/todos/",
        Some(&token),
        Some(json!({ "title": "t", "due_date": "next tuesday" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid due date format. Use ISO format (YYYY-MM-DDTHH:MM:SS)"
    );
}

#[tokio::test]
async fn test_update_can_clear_due_date() {
    let app = app();
    let token = register_and_login(&app, "ivan").await;

    let (_, created) = send(
        &app,
        "POST",
        "/api/todos/",
        Some(&token),
        Some(json!({ "title": "t", "due_date": "2026-06-01T12:00:00" })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/todos/{}", id),
        Some(&token),
        Some(json!({ "due_date": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(updated["due_date"].is_null());
}

#[tokio::test]
async fn test_completed_query_filter() {
    let app = app();
    let token = register_and_login(&app, "judy").await;

    let (_, first) = send(
        &app,
        "POST",
        "/api/todos/",
        Some(&token),
        Some(json!({ "title": "done one" })),
    )
    .await;
    send(
        &app,
        "POST",
        "/api/todos/",
        Some(&token),
        Some(json!({ "title": "open one" })),
    )
    .await;
    send(
        &app,
        "PUT",
        &format!("/api/todos/{}", first["id"].as_i64().unwrap()),
        Some(&token),
        Some(json!({ "completed": true })),
    )
    .await;

    let (status, completed) =
        send(&app, "GET", "/api/todos/?completed=true", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let completed = completed.as_array().unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0]["title"], "done one");

    let (_, active) = send(&app, "GET", "/api/todos/?completed=false", Some(&token), None).await;
    assert_eq!(active.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_todos_are_scoped_per_user() {
    let app = app();
    let token_a = register_and_login(&app, "kevin").await;
    let token_b = register_and_login(&app, "laura").await;

    let (_, created) = send(
        &app,
        "POST",
        "/api/todos/",
        Some(&token_a),
        Some(json!({ "title": "private" })),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/api/todos/{}", id), Some(&token_b), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Todo not found");

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/api/todos/{}", id),
        Some(&token_b),
        Some(json!({ "title": "stolen" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/todos/{}", id),
        Some(&token_b),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, listed) = send(&app, "GET", "/api/todos/", Some(&token_b), None).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_todos_require_token() {
    let app = app();
    let (status, _) = send(&app, "GET", "/api/todos/", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        "POST",
        "/api/todos/",
        None,
        Some(json!({ "title": "t" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
