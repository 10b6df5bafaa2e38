//! Todo Repository
//!
//! SQLite-backed implementation for Todo CRUD, scoped lookups and the
//! per-user listing with an optional completion filter.

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::Db;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Todo};

/// SQLite implementation of the Todo repository
pub struct TodoRepository {
    conn: Db,
}

const TODO_COLUMNS: &str =
    "id, title, description, completed, created_at, updated_at, due_date, user_id";

impl TodoRepository {
    pub fn new(conn: Db) -> Self {
        Self { conn }
    }

    /// List a user's todos, newest first, optionally filtered by completion
    pub async fn list_by_user(
        &self,
        user_id: i64,
        completed: Option<bool>,
    ) -> DomainResult<Vec<Todo>> {
        let conn = self.conn.lock().await;

        let rows = match completed {
            Some(flag) => {
                let mut stmt = conn
                    .prepare(&format!(
                        "SELECT {} FROM todos WHERE user_id = ?1 AND completed = ?2
                         ORDER BY created_at DESC",
                        TODO_COLUMNS
                    ))
                    .map_err(|e| DomainError::Internal(e.to_string()))?;
                let collected = stmt
                    .query_map(params![user_id, flag], row_to_todo)
                    .map_err(|e| DomainError::Internal(e.to_string()))?
                    .collect::<rusqlite::Result<Vec<_>>>();
                collected
            }
            None => {
                let mut stmt = conn
                    .prepare(&format!(
                        "SELECT {} FROM todos WHERE user_id = ?1 ORDER BY created_at DESC",
                        TODO_COLUMNS
                    ))
                    .map_err(|e| DomainError::Internal(e.to_string()))?;
                let collected = stmt
                    .query_map(params![user_id], row_to_todo)
                    .map_err(|e| DomainError::Internal(e.to_string()))?
                    .collect::<rusqlite::Result<Vec<_>>>();
                collected
            }
        };

        rows.map_err(|e| DomainError::Internal(e.to_string()))
    }

    /// Find a todo only if it belongs to the given user
    pub async fn find_for_user(&self, id: i64, user_id: i64) -> DomainResult<Option<Todo>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            &format!(
                "SELECT {} FROM todos WHERE id = ?1 AND user_id = ?2",
                TODO_COLUMNS
            ),
            params![id, user_id],
            row_to_todo,
        )
        .optional()
        .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

#[async_trait]
impl Repository<Todo> for TodoRepository {
    async fn create(&self, entity: &Todo) -> DomainResult<Todo> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO todos (title, description, completed, created_at, updated_at, due_date, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                entity.title,
                entity.description,
                entity.completed,
                entity.created_at,
                entity.updated_at,
                entity.due_date,
                entity.user_id
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid();
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<Todo>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            &format!("SELECT {} FROM todos WHERE id = ?1", TODO_COLUMNS),
            params![id],
            row_to_todo,
        )
        .optional()
        .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn list(&self) -> DomainResult<Vec<Todo>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {} FROM todos ORDER BY created_at DESC",
                TODO_COLUMNS
            ))
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        let rows = stmt
            .query_map([], row_to_todo)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn update(&self, entity: &Todo) -> DomainResult<Todo> {
        let conn = self.conn.lock().await;
        conn.execute(
            "UPDATE todos SET title = ?1, description = ?2, completed = ?3,
             updated_at = ?4, due_date = ?5 WHERE id = ?6",
            params![
                entity.title,
                entity.description,
                entity.completed,
                entity.updated_at,
                entity.due_date,
                entity.id
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        conn.execute("DELETE FROM todos WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(())
    }
}

/// Convert a database row to Todo
fn row_to_todo(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        completed: row.get(3)?,
        created_at: row.get(4)?,
        updated_at: row.get(5)?,
        due_date: row.get(6)?,
        user_id: row.get(7)?,
    })
}
