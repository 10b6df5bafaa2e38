//! User Entity
//!
//! Account record with a hashed credential. The password hash is never
//! serialized into API responses.

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::{NaiveDateTime, Utc};
use serde::Serialize;

use super::entity::{DomainError, DomainResult, Entity};

/// A registered user account
#[derive(Debug, Clone, Serialize)]
pub struct User {
    /// Unique identifier
    pub id: i64,
    /// Unique display/login name
    pub username: String,
    /// Unique email address
    pub email: String,
    /// Argon2 PHC string, excluded from responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// When the account was created
    pub created_at: NaiveDateTime,
}

impl User {
    /// Create a new user with no password set yet (ID assigned by the database)
    pub fn new(username: String, email: String) -> Self {
        Self {
            id: 0,
            username,
            email,
            password_hash: String::new(),
            created_at: Utc::now().naive_utc(),
        }
    }

    /// Hash and store a plain text password
    pub fn set_password(&mut self, password: &str) -> DomainResult<()> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        self.password_hash = hash.to_string();
        Ok(())
    }

    /// Check a plain text password against the stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.password_hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Entity for User {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }
}
