//! Registration endpoint with input validation.
//! Used by: server.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::console;
use crate::error::{Error, Result};
use crate::password::hash_password;
use crate::state::AppState;
use crate::users::sqlite::User;

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub data: RegisteredUser,
}

#[derive(Serialize)]
pub struct RegisteredUser {
    pub id: String,
    pub username: String,
    pub email: String,
}

fn validate_request(req: &RegisterRequest) -> Result<()> {
    if req.username.trim().is_empty() {
        return Err(Error::Validation("username is required".into()));
    }
    if !is_valid_email(&req.email) {
        return Err(Error::Validation("valid email is required".into()));
    }
    if req.password.len() < 6 {
        return Err(Error::Validation("password must be at least 6 chars".into()));
    }
    Ok(())
}

/// Structural check only: one '@' with a dotted domain behind it.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(|c| c.is_whitespace())
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    validate_request(&req)?;

    if state.users.find_by_email(&req.email)?.is_some() {
        return Err(Error::EmailTaken);
    }

    let user = User::new(req.username.trim(), &req.email, &hash_password(&req.password)?);
    state.users.insert(&user)?;

    tracing::info!(username = %user.username, email = %user.email, "user registered");
    console::log_register(&user.username);
    state.metrics.record_registration();

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            status: "success",
            message: "User registered successfully",
            data: RegisteredUser {
                id: user.id,
                username: user.username,
                email: user.email,
            },
        }),
    ))
}
