//! Todo Routes
//!
//! CRUD over the authenticated user's todos.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::json;

use crate::auth::AuthUser;
use crate::domain::Todo;
use crate::repository::Repository;
use crate::routes::ApiError;
use crate::AppState;

const DUE_DATE_ERROR: &str = "Invalid due date format. Use ISO format (YYYY-MM-DDTHH:MM:SS)";

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    completed: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    title: Option<String>,
    description: Option<String>,
    due_date: Option<String>,
}

/// Partial update. `Option<Option<_>>` distinguishes an absent field from an
/// explicit `null` (which clears the value).
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTodoRequest {
    title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    description: Option<Option<String>>,
    completed: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    due_date: Option<Option<String>>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Accepts the formats a datetime-local input or an ISO timestamp produce
fn parse_due_date(value: &str) -> Result<NaiveDateTime, ApiError> {
    const FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    for format in FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    Err(ApiError::bad_request(DUE_DATE_ERROR))
}

/// GET /api/todos/
pub async fn list(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.todos.list_by_user(user_id, query.completed).await?;
    Ok(Json(todos))
}

/// POST /api/todos/
pub async fn create(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(body): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let title = match body.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(ApiError::bad_request("Title is required")),
    };

    let due_date = match body.due_date.as_deref() {
        Some(value) if !value.is_empty() => Some(parse_due_date(value)?),
        _ => None,
    };

    let todo = Todo::new(title, body.description, due_date, user_id);
    let created = state.todos.create(&todo).await?;

    tracing::debug!(todo_id = created.id, user_id, "todo created");

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /api/todos/:id
pub async fn get_one(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state
        .todos
        .find_for_user(id, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found"))?;
    Ok(Json(todo))
}

/// PUT /api/todos/:id
pub async fn update(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
    Json(body): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, ApiError> {
    let mut todo = state
        .todos
        .find_for_user(id, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found"))?;

    if let Some(title) = body.title {
        todo.title = title;
    }
    if let Some(description) = body.description {
        todo.description = description;
    }
    if let Some(completed) = body.completed {
        todo.completed = completed;
    }
    if let Some(due_date) = body.due_date {
        todo.due_date = match due_date.as_deref() {
            Some(value) if !value.is_empty() => Some(parse_due_date(value)?),
            _ => None,
        };
    }

    todo.updated_at = Utc::now().naive_utc();
    let updated = state.todos.update(&todo).await?;
    Ok(Json(updated))
}

/// DELETE /api/todos/:id
pub async fn remove(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let todo = state
        .todos
        .find_for_user(id, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Todo not found"))?;

    state.todos.delete(todo.id).await?;

    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}
