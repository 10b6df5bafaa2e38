//! Repository Layer
//!
//! Data access abstractions and their SQLite implementations.

mod db;
mod todo_repo;
mod traits;
mod user_repo;

#[cfg(test)]
mod tests;

pub use db::{init_db, init_db_in_memory, Db};
pub use todo_repo::TodoRepository;
pub use traits::Repository;
pub use user_repo::UserRepository;
