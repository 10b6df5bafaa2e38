//! Server Configuration
//!
//! Collected from environment variables with sensible defaults for local
//! development.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Listen address.
    pub addr: SocketAddr,
    /// SQLite database file path.
    pub db_path: PathBuf,
    /// Secret used to sign access tokens.
    pub jwt_secret: String,
    /// Enable CORS for the browser frontend.
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 5001)),
            db_path: PathBuf::from("todolist.db"),
            jwt_secret: "dev-secret-change-me".to_string(),
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(addr) = std::env::var("BIND_ADDR") {
            if let Ok(parsed) = addr.parse() {
                config.addr = parsed;
            } else {
                tracing::warn!(%addr, "ignoring unparseable BIND_ADDR");
            }
        }
        if let Ok(path) = std::env::var("DATABASE_PATH") {
            config.db_path = PathBuf::from(path);
        }
        if let Ok(secret) = std::env::var("JWT_SECRET") {
            config.jwt_secret = secret;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.addr.port(), 5001);
        assert!(config.cors);
    }
}
