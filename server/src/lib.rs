//! Todo List Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - auth: Token issuing/verification and the request extractor
//! - routes: HTTP handlers and router wiring

use std::sync::Arc;

pub mod auth;
pub mod config;
pub mod domain;
pub mod repository;
pub mod routes;

use auth::TokenService;
use repository::{Db, TodoRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserRepository>,
    pub todos: Arc<TodoRepository>,
    pub tokens: Arc<TokenService>,
}

impl AppState {
    pub fn new(db: Db, jwt_secret: &str) -> Self {
        Self {
            users: Arc::new(UserRepository::new(db.clone())),
            todos: Arc::new(TodoRepository::new(db)),
            tokens: Arc::new(TokenService::new(jwt_secret)),
        }
    }
}
