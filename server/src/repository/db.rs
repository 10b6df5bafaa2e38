//! Database Connection and Setup
//!
//! Manages the SQLite connection and schema setup.

use std::path::Path;
use std::sync::Arc;

use rusqlite::Connection;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Shared database handle used by all repositories
pub type Db = Arc<Mutex<Connection>>;

/// Open (or create) the database at the given path and set up the schema
pub fn init_db(db_path: &Path) -> DomainResult<Db> {
    let conn = Connection::open(db_path)
        .map_err(|e| DomainError::Internal(format!("Failed to open database: {}", e)))?;
    setup(conn)
}

/// In-memory database for tests
pub fn init_db_in_memory() -> DomainResult<Db> {
    let conn = Connection::open_in_memory()
        .map_err(|e| DomainError::Internal(format!("Failed to open database: {}", e)))?;
    setup(conn)
}

fn setup(conn: Connection) -> DomainResult<Db> {
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(|e| DomainError::Internal(e.to_string()))?;
    run_migrations(&conn)?;
    Ok(Arc::new(Mutex::new(conn)))
}

/// Create tables and indexes if they don't exist
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS todos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            completed INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            due_date TEXT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE
        )",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    // Index for the per-user listing query
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_todos_user ON todos(user_id)",
        (),
    )
    .map_err(|e| DomainError::Internal(e.to_string()))?;

    Ok(())
}
