//! Bearer-token extraction and the request identity context.
//! Used by: handlers::me.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::config::AuthConfig;
use crate::error::{Error, Result};
use crate::state::AppState;
use crate::token::claims::Claims;
use crate::token::verify::verify_token;

/// Identity attached to a request after its bearer token verified.
/// Lives for the current request only; handlers receive it by value.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            username: claims.username,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Pulls the token out of `Authorization: Bearer <token>`. The scheme match
/// is exact: anything else counts as a missing token, not an invalid one.
fn bearer_token(header: Option<&str>) -> Result<&str> {
    header
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(Error::NoTokenProvided)
}

fn authenticate(header: Option<&str>, config: &AuthConfig) -> Result<Claims> {
    let token = bearer_token(header)?;
    verify_token(token, config)
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        match authenticate(header, &state.auth) {
            Ok(claims) => {
                state.metrics.record_verify();
                Ok(claims.into())
            }
            Err(e) => {
                state.metrics.record_reject();
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::sign::sign_token;
    use chrono::{Duration, Utc};

    fn config() -> AuthConfig {
        AuthConfig::new("s3cret", "15m").unwrap()
    }

    fn token_for(claims: &Claims) -> String {
        sign_token(claims, &config()).unwrap()
    }

    #[test]
    fn absent_header_is_no_token() {
        let result = authenticate(None, &config());
        assert!(matches!(result, Err(Error::NoTokenProvided)));
    }

    #[test]
    fn non_bearer_scheme_is_no_token() {
        let result = authenticate(Some("Token abc123"), &config());
        assert!(matches!(result, Err(Error::NoTokenProvided)));
    }

    #[test]
    fn lowercase_scheme_is_no_token() {
        let result = authenticate(Some("bearer abc123"), &config());
        assert!(matches!(result, Err(Error::NoTokenProvided)));
    }

    #[test]
    fn bare_scheme_is_no_token() {
        let result = authenticate(Some("Bearer"), &config());
        assert!(matches!(result, Err(Error::NoTokenProvided)));
    }

    #[test]
    fn valid_bearer_token_authenticates() -> Result<()> {
        let claims = Claims::new("u1", "alice", "a@x.com", "user", Duration::minutes(15));
        let header = format!("Bearer {}", token_for(&claims));
        let verified = authenticate(Some(&header), &config())?;
        assert_eq!(verified, claims);
        Ok(())
    }

    #[test]
    fn expired_bearer_token_is_expired() {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "u1".into(),
            username: "alice".into(),
            email: "a@x.com".into(),
            role: "user".into(),
            iat: now - 120,
            exp: now - 60,
        };
        let header = format!("Bearer {}", token_for(&claims));
        let result = authenticate(Some(&header), &config());
        assert!(matches!(result, Err(Error::TokenExpired)));
    }

    #[test]
    fn context_carries_the_four_claim_fields() {
        let claims = Claims::new("u1", "alice", "a@x.com", "user", Duration::minutes(15));
        let user = AuthUser::from(claims);
        assert_eq!(user.id, "u1");
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.role, "user");
    }
}
