//! Unified error types for Gatepass.
//! Used by: config, token, users, extract, handlers.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing required configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    #[error("No token provided")]
    NoTokenProvided,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User already exists with this email")]
    EmailTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("password hashing error: {0}")]
    Hashing(String),

    #[error("signing error: {0}")]
    Signing(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::NoTokenProvided
            | Error::TokenExpired
            | Error::InvalidToken(_)
            | Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Error::EmailTaken => StatusCode::CONFLICT,
            Error::UserNotFound => StatusCode::NOT_FOUND,
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::ConfigMissing(_)
            | Error::ConfigInvalid(_)
            | Error::Database(_)
            | Error::Serialization(_)
            | Error::Hashing(_)
            | Error::Signing(_)
            | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "internal error");
        }
        if let Error::InvalidToken(ref detail) = self {
            tracing::debug!(detail = %detail, "token rejected");
        }
        let body = serde_json::json!({
            "status": "error",
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn lock_err<E>(what: &'static str) -> impl FnOnce(E) -> Error {
    move |_| Error::Internal(format!("{what} lock poisoned"))
}
