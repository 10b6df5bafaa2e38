//! Frontend Models
//!
//! Data structures matching backend entities, plus the client-side filter.

use serde::{Deserialize, Serialize};

/// Todo data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: String,
    pub updated_at: String,
    pub due_date: Option<String>,
    pub user_id: i64,
}

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub created_at: String,
}

/// Login response payload
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// Registration response payload
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

/// Three-way view filter over the fetched todo list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }

    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Filter::All => "No todos yet. Add your first todo!",
            Filter::Active => "No active todos.",
            Filter::Completed => "No completed todos.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(id: i64, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("todo {}", id),
            description: None,
            completed,
            created_at: "2026-01-01T00:00:00".to_string(),
            updated_at: "2026-01-01T00:00:00".to_string(),
            due_date: None,
            user_id: 1,
        }
    }

    #[test]
    fn test_filter_partitions_cover_the_list() {
        let todos = vec![todo(1, false), todo(2, true), todo(3, false), todo(4, true)];

        let active: Vec<_> = todos.iter().filter(|t| Filter::Active.matches(t)).collect();
        let completed: Vec<_> = todos.iter().filter(|t| Filter::Completed.matches(t)).collect();
        let all: Vec<_> = todos.iter().filter(|t| Filter::All.matches(t)).collect();

        // Complete cover
        assert_eq!(all.len(), todos.len());
        assert_eq!(active.len() + completed.len(), todos.len());

        // Disjoint
        for t in &active {
            assert!(!completed.iter().any(|c| c.id == t.id));
        }
    }

    #[test]
    fn test_every_todo_matches_exactly_one_of_active_completed() {
        for t in [todo(1, false), todo(2, true)] {
            assert!(Filter::All.matches(&t));
            assert_ne!(Filter::Active.matches(&t), Filter::Completed.matches(&t));
        }
    }
}
