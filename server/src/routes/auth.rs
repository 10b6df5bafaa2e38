//! Auth Routes
//!
//! Registration, login and current-user lookup.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::auth::AuthUser;
use crate::repository::Repository;
use crate::domain::User;
use crate::routes::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let (Some(username), Some(email), Some(password)) = (body.username, body.email, body.password)
    else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    if state.users.find_by_username(&username).await?.is_some() {
        return Err(ApiError::bad_request("Username already exists"));
    }
    if state.users.find_by_email(&email).await?.is_some() {
        return Err(ApiError::bad_request("Email already exists"));
    }

    let mut user = User::new(username, email);
    user.set_password(&password)?;
    let created = state.users.create(&user).await?;

    tracing::info!(user_id = created.id, username = %created.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "User registered successfully",
            "user": created,
        })),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return Err(ApiError::bad_request("Missing required fields"));
    };

    let user = state.users.find_by_username(&username).await?;
    let user = match user {
        Some(user) if user.verify_password(&password) => user,
        _ => return Err(ApiError::unauthorized("Invalid username or password")),
    };

    let access_token = state.tokens.issue(user.id)?;

    Ok(Json(json!({
        "access_token": access_token,
        "user": user,
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<User>, ApiError> {
    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(user))
}
