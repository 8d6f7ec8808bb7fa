//! HS256 token issuance.
//! Used by: handlers::login.

use jsonwebtoken::{encode, EncodingKey, Header};

use crate::config::AuthConfig;
use crate::error::{Error, Result};
use crate::token::claims::Claims;

pub fn sign_token(claims: &Claims, config: &AuthConfig) -> Result<String> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(config.secret().as_bytes()),
    )
    .map_err(|e| Error::Signing(e.to_string()))
}
