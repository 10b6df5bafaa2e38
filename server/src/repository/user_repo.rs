//! User Repository
//!
//! SQLite-backed implementation for User accounts, plus the lookups the
//! auth flow needs (by username, by email).

use async_trait::async_trait;
use rusqlite::{params, OptionalExtension, Row};

use super::db::Db;
use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, User};

/// SQLite implementation of the User repository
pub struct UserRepository {
    conn: Db,
}

const USER_COLUMNS: &str = "id, username, email, password_hash, created_at";

impl UserRepository {
    pub fn new(conn: Db) -> Self {
        Self { conn }
    }

    pub async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            &format!("SELECT {} FROM users WHERE username = ?1", USER_COLUMNS),
            params![username],
            row_to_user,
        )
        .optional()
        .map_err(|e| DomainError::Internal(e.to_string()))
    }

    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            &format!("SELECT {} FROM users WHERE email = ?1", USER_COLUMNS),
            params![email],
            row_to_user,
        )
        .optional()
        .map_err(|e| DomainError::Internal(e.to_string()))
    }
}

#[async_trait]
impl Repository<User> for UserRepository {
    async fn create(&self, entity: &User) -> DomainResult<User> {
        let conn = self.conn.lock().await;
        conn.execute(
            "INSERT INTO users (username, email, password_hash, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                entity.username,
                entity.email,
                entity.password_hash,
                entity.created_at
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;

        let mut created = entity.clone();
        created.id = conn.last_insert_rowid();
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<Option<User>> {
        let conn = self.conn.lock().await;
        conn.query_row(
            &format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS),
            params![id],
            row_to_user,
        )
        .optional()
        .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let conn = self.conn.lock().await;
        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS))
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        let rows = stmt
            .query_map([], row_to_user)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        rows.collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    async fn update(&self, entity: &User) -> DomainResult<User> {
        let conn = self.conn.lock().await;
        conn.execute(
            "UPDATE users SET username = ?1, email = ?2, password_hash = ?3 WHERE id = ?4",
            params![
                entity.username,
                entity.email,
                entity.password_hash,
                entity.id
            ],
        )
        .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let conn = self.conn.lock().await;
        // Foreign key cascade removes the user's todos
        conn.execute("DELETE FROM users WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        Ok(())
    }
}

/// Convert a database row to User
fn row_to_user(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        created_at: row.get(4)?,
    })
}
