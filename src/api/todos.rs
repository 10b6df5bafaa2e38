//! Todo API Calls
//!
//! Frontend bindings for the todo CRUD endpoints.

use reqwest::Method;
use serde::Serialize;

use super::{delete, get_json, send_json};
use crate::models::Todo;

#[derive(Serialize)]
pub struct CreateTodoArgs<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<&'a str>,
}

/// Partial update. Fields left as `None` are omitted from the request body;
/// `due_date: Some(None)` serializes as an explicit `null` to clear it.
#[derive(Serialize, Default)]
pub struct UpdateTodoArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Option<&'a str>>,
}

pub async fn list_todos() -> Result<Vec<Todo>, String> {
    get_json("/todos/", "Failed to fetch todos. Please try again.").await
}

pub async fn get_todo(id: i64) -> Result<Todo, String> {
    get_json(
        &format!("/todos/{}", id),
        "Failed to fetch todo. Please try again.",
    )
    .await
}

pub async fn create_todo(args: &CreateTodoArgs<'_>) -> Result<Todo, String> {
    send_json(
        Method::POST,
        "/todos/",
        args,
        "Failed to save todo. Please try again.",
    )
    .await
}

pub async fn update_todo(id: i64, args: &UpdateTodoArgs<'_>) -> Result<Todo, String> {
    send_json(
        Method::PUT,
        &format!("/todos/{}", id),
        args,
        "Failed to save todo. Please try again.",
    )
    .await
}

pub async fn delete_todo(id: i64) -> Result<(), String> {
    delete(
        &format!("/todos/{}", id),
        "Failed to delete todo. Please try again.",
    )
    .await
}
