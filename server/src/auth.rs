//! Token Authentication
//!
//! Issues and verifies the bearer tokens attached to every protected
//! request, and provides the extractor handlers use to identify the caller.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};
use crate::routes::ApiError;
use crate::AppState;

/// Token lifetime, matching the login session length
const TOKEN_TTL_DAYS: i64 = 7;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID as a string
    pub sub: String,
    /// Issued-at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// Issues and verifies access tokens with a shared secret
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a token for the given user
    pub fn issue(&self, user_id: i64) -> DomainResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    /// Verify a token and return the user ID it was issued for
    pub fn verify(&self, token: &str) -> DomainResult<i64> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| DomainError::Unauthorized(format!("Invalid token: {}", e)))?;
        data.claims
            .sub
            .parse::<i64>()
            .map_err(|_| DomainError::Unauthorized("Invalid token subject".to_string()))
    }
}

/// The authenticated caller, resolved from the Authorization header
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(ApiError::missing_authorization)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(ApiError::missing_authorization)?;

        let user_id = state.tokens.verify(token)?;
        Ok(AuthUser(user_id))
    }
}
