//! Login endpoint: credential check and token issuance.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::console;
use crate::error::{Error, Result};
use crate::password::verify_password;
use crate::state::AppState;
use crate::token::claims::Claims;
use crate::token::sign::sign_token;

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub token: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: String,
}

fn validate_request(req: &LoginRequest) -> Result<()> {
    if req.email.is_empty() {
        return Err(Error::Validation("email is required".into()));
    }
    if req.password.is_empty() {
        return Err(Error::Validation("password is required".into()));
    }
    Ok(())
}

/// Unknown email and wrong password take the same exit: the response must
/// not reveal which one failed.
fn rejected(state: &AppState, email: &str) -> Error {
    state.metrics.record_login_failure();
    console::log_login_failure(email);
    Error::InvalidCredentials
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    validate_request(&req)?;

    let Some(user) = state.users.find_by_email(&req.email)? else {
        return Err(rejected(&state, &req.email));
    };
    if !verify_password(&req.password, &user.password_hash)? {
        return Err(rejected(&state, &req.email));
    }

    let claims = Claims::new(
        &user.id,
        &user.username,
        &user.email,
        &user.role,
        state.auth.ttl(),
    );
    let token = sign_token(&claims, &state.auth)?;

    tracing::info!(username = %user.username, "authentication successful");
    console::log_login(&user.username);
    state.metrics.record_issue();

    Ok(Json(LoginResponse {
        status: "success",
        message: "Authentication successful",
        token,
        expires_in: state.auth.ttl_str().to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::register::{register, RegisterRequest};
    use crate::state::build_test_state;
    use crate::token::verify::verify_token;

    async fn state_with_alice() -> Result<AppState> {
        let state = build_test_state("s3cret", "15m")?;
        register(
            State(state.clone()),
            Json(RegisterRequest {
                username: "alice".into(),
                email: "a@x.com".into(),
                password: "hunter22".into(),
            }),
        )
        .await?;
        Ok(state)
    }

    fn req(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn empty_fields_rejected() {
        assert!(validate_request(&req("", "hunter22")).is_err());
        assert!(validate_request(&req("a@x.com", "")).is_err());
        assert!(validate_request(&req("a@x.com", "hunter22")).is_ok());
    }

    #[tokio::test]
    async fn login_issues_verifiable_token() -> Result<()> {
        let state = state_with_alice().await?;
        let Json(resp) = login(State(state.clone()), Json(req("a@x.com", "hunter22"))).await?;
        assert_eq!(resp.status, "success");
        assert_eq!(resp.message, "Authentication successful");
        assert_eq!(resp.expires_in, "15m");

        let claims = verify_token(&resp.token, &state.auth)?;
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.role, "user");
        let stored = state.users.find_by_email("a@x.com")?.unwrap();
        assert_eq!(claims.sub, stored.id);
        Ok(())
    }

    #[tokio::test]
    async fn wrong_password_rejected_uniformly() -> Result<()> {
        let state = state_with_alice().await?;
        let result = login(State(state), Json(req("a@x.com", "wrong-pass"))).await;
        assert!(matches!(result, Err(Error::InvalidCredentials)));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_email_rejected_uniformly() -> Result<()> {
        let state = state_with_alice().await?;
        let result = login(State(state), Json(req("b@x.com", "hunter22"))).await;
        assert!(matches!(result, Err(Error::InvalidCredentials)));
        Ok(())
    }

    #[tokio::test]
    async fn failures_counted_once_each() -> Result<()> {
        let state = state_with_alice().await?;
        let _ = login(State(state.clone()), Json(req("a@x.com", "wrong-pass"))).await;
        let _ = login(State(state.clone()), Json(req("b@x.com", "hunter22"))).await;
        assert_eq!(state.metrics.snapshot().login_failures, 2);
        assert_eq!(state.metrics.snapshot().tokens_issued, 0);
        Ok(())
    }
}
