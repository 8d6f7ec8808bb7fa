//! JWT claims carried by access tokens.
//! Used by: token::sign, token::verify, extract, handlers::login.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Identity payload embedded in every issued token. `sub` carries the
/// user-store primary key. The identity fields default when absent from a
/// decoded payload: the signature is the trust boundary, not field presence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    #[serde(default)]
    pub sub: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(id: &str, username: &str, email: &str, role: &str, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: id.to_owned(),
            username: username.to_owned(),
            email: email.to_owned(),
            role: role.to_owned(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
