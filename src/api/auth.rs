//! Auth API Calls
//!
//! Frontend bindings for login, registration and session lookup.

use reqwest::Method;
use serde::Serialize;

use super::{get_json, send_json};
use crate::models::{AuthResponse, RegisterResponse, User};

#[derive(Serialize)]
struct LoginArgs<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterArgs<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
}

pub async fn login(username: &str, password: &str) -> Result<AuthResponse, String> {
    send_json(
        Method::POST,
        "/auth/login",
        &LoginArgs { username, password },
        "Failed to login. Please try again.",
    )
    .await
}

pub async fn register(
    username: &str,
    email: &str,
    password: &str,
) -> Result<RegisterResponse, String> {
    send_json(
        Method::POST,
        "/auth/register",
        &RegisterArgs {
            username,
            email,
            password,
        },
        "Failed to register. Please try again.",
    )
    .await
}

pub async fn current_user() -> Result<User, String> {
    get_json("/auth/me", "Failed to load user.").await
}
