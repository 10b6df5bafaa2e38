//! HTTP Routes
//!
//! Handlers organized by domain, plus the router wiring.

mod auth;
mod error;
mod todos;

pub use error::ApiError;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/me", get(auth::me))
        .route("/api/todos/", get(todos::list).post(todos::create))
        .route(
            "/api/todos/:id",
            get(todos::get_one).put(todos::update).delete(todos::remove),
        )
        .with_state(state)
}

/// GET / - welcome document listing the endpoint prefixes
async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Welcome to the Todo List API",
        "endpoints": {
            "auth": "/api/auth",
            "todos": "/api/todos"
        },
        "documentation": "See README.md for API documentation"
    }))
}
