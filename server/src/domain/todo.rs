//! Todo Entity
//!
//! A user-owned task record with title, optional description, completion
//! state and optional due date.

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// A single todo record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier
    pub id: i64,
    /// Title (required, non-empty)
    pub title: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Completion status
    pub completed: bool,
    /// When the todo was created
    pub created_at: NaiveDateTime,
    /// When the todo was last updated
    pub updated_at: NaiveDateTime,
    /// Optional due date
    pub due_date: Option<NaiveDateTime>,
    /// Owning user
    pub user_id: i64,
}

impl Todo {
    /// Create a new todo (ID assigned by the database)
    pub fn new(
        title: String,
        description: Option<String>,
        due_date: Option<NaiveDateTime>,
        user_id: i64,
    ) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            id: 0,
            title,
            description,
            completed: false,
            created_at: now,
            updated_at: now,
            due_date,
            user_id,
        }
    }
}

impl Entity for Todo {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}
